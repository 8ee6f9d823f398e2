use crate::identity::User;
use crate::template::PageBuilder;
use rocket::{get, uri};
use rocket_dyn_templates::{context, Template};

#[get("/")]
pub(crate) fn home_page(page: PageBuilder, user: Option<User>) -> Template {
    page.render(
        "index",
        context! {
            may_participate: user.as_ref().is_some_and(User::is_member_or_mentor),
            events_uri: uri!(crate::event::events_page()),
            member_application_uri: uri!(crate::member_application::new_member_application_page()),
        },
    )
}
