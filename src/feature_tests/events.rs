use super::*;
use crate::database::Repository as _;

#[rocket::async_test]
async fn creating_an_event_with_valid_information_shows_it() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;

    let id = create_event(&client, "This Thing").await;

    let html = get_page(&client, &format!("/events/{id}")).await;
    assert!(html.contains("Your event has been created."));
    assert!(html.contains("This Thing"));
    assert!(html.contains("That place"));
}

#[rocket::async_test]
async fn creating_an_event_without_information_shows_errors() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;

    let response = post_form(&client, "/events", &[]).await;

    assert_eq!(Status::UnprocessableEntity, response.status());
    let html = response.into_string().await.unwrap();
    assert!(html.contains("error"));
    assert!(html.contains("Create Event"));
    assert!(repository(&client).await.get_events().await.unwrap().is_empty());
}

#[rocket::async_test]
async fn unknown_event_fields_are_ignored() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;
    let mut fields = valid_event_fields();
    fields.push(("organizer", LIEUTENANT));

    let response = post_form(&client, "/events", &fields).await;

    assert_eq!(Status::SeeOther, response.status());
    let events = repository(&client).await.get_events().await.unwrap();
    assert_eq!(1, events.len());
    assert!(!repository(&client)
        .await
        .is_organizer(events[0].id, &UserUuid::from(LIEUTENANT))
        .await
        .unwrap());
}

#[rocket::async_test]
async fn invalid_form_keeps_the_submitted_values() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;

    let response = post_form(&client, "/events", &[("title", "Half an Event")]).await;

    assert_eq!(Status::UnprocessableEntity, response.status());
    let html = response.into_string().await.unwrap();
    assert!(html.contains(r#"value="Half an Event""#));
}

#[rocket::async_test]
async fn event_description_is_rendered_as_markdown() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;
    let mut fields = valid_event_fields();
    fields[1] = ("description", "We do **things**");
    let response = post_form(&client, "/events", &fields).await;

    let html = get_page(&client, &location(&response)).await;
    assert!(html.contains("<strong>things</strong>"));
}

#[rocket::async_test]
async fn index_lists_events_by_date() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;
    let mut later = valid_event_fields();
    later[0] = ("title", "Later Thing");
    later[3] = ("date", "2026-11-01");
    post_form(&client, "/events", &later).await;
    create_event(&client, "Earlier Thing").await;

    let html = get_page(&client, "/events").await;

    let earlier = html.find("Earlier Thing").expect("earlier event listed");
    let later = html.find("Later Thing").expect("later event listed");
    assert!(earlier < later);
}

#[rocket::async_test]
async fn unknown_event_is_not_found() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;

    let response = client.get("/events/999").dispatch().await;

    assert_eq!(Status::NotFound, response.status());
    assert!(response.into_string().await.unwrap().contains("Not Found"));
}

#[rocket::async_test]
async fn creator_becomes_organizer() {
    let client = client().await;
    sign_in(&client, CAPTAIN).await;

    let id = create_event(&client, "This Thing").await;

    let mut repository = repository(&client).await;
    assert!(repository.is_organizer(id, &UserUuid::from(CAPTAIN)).await.unwrap());
    let html = get_page(&client, &format!("/events/{id}")).await;
    assert!(section(&html, r#"<section id="organizers">"#, "</section>").contains("Captain Awesome"));
}

mod editing {
    use super::*;

    #[rocket::async_test]
    async fn organizer_updates_event() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        let html = get_page(&client, &format!("/events/{id}/edit")).await;
        assert!(html.contains(r#"value="That place""#));

        let mut fields = valid_event_fields();
        fields[2] = ("location", "That other place");
        let response = post_form(&client, &format!("/events/{id}/edit"), &fields).await;

        assert_eq!(Status::SeeOther, response.status());
        let html = get_page(&client, &location(&response)).await;
        assert!(html.contains("Your event has been updated."));
        assert!(html.contains("That other place"));
    }

    #[rocket::async_test]
    async fn empty_location_is_rejected() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;

        let mut fields = valid_event_fields();
        fields[2] = ("location", "");
        let response = post_form(&client, &format!("/events/{id}/edit"), &fields).await;

        assert_eq!(Status::UnprocessableEntity, response.status());
        let html = response.into_string().await.unwrap();
        assert!(html.contains("error"));
        assert!(html.contains("Confirm changes"));
        let event = repository(&client).await.get_event(id).await.unwrap().unwrap();
        assert_eq!("That place", event.location);
    }

    #[rocket::async_test]
    async fn other_members_may_not_edit() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        sign_in(&client, LIEUTENANT).await;

        let response = client.get(format!("/events/{id}/edit")).dispatch().await;
        assert_eq!(Status::Forbidden, response.status());

        let response = post_form(&client, &format!("/events/{id}/edit"), &valid_event_fields()).await;
        assert_eq!(Status::Forbidden, response.status());

        let html = get_page(&client, &format!("/events/{id}")).await;
        assert!(!html.contains("Edit event"));
    }
}

mod deleting {
    use super::*;

    #[rocket::async_test]
    async fn organizer_deletes_event() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        repository(&client)
            .await
            .add_rsvp(id, &UserUuid::from(LIEUTENANT))
            .await
            .unwrap();
        get_page(&client, &format!("/events/{id}/delete")).await;

        let response = post_form(&client, &format!("/events/{id}/delete"), &[]).await;

        assert_eq!(Status::SeeOther, response.status());
        let html = get_page(&client, &location(&response)).await;
        assert!(html.contains("Your event has been deleted."));
        assert!(!html.contains("This Thing"));
        let mut repository = repository(&client).await;
        assert!(repository.get_rsvps(id).await.unwrap().is_empty());
        assert!(repository.get_organizers(id).await.unwrap().is_empty());
    }

    #[rocket::async_test]
    async fn other_members_may_not_delete() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        sign_in(&client, LIEUTENANT).await;

        let response = post_form(&client, &format!("/events/{id}/delete"), &[]).await;

        assert_eq!(Status::Forbidden, response.status());
        assert!(get_page(&client, "/events").await.contains("This Thing"));
    }
}

mod rsvp {
    use super::*;

    #[rocket::async_test]
    async fn member_rsvps_and_cancels() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        sign_in(&client, LIEUTENANT).await;

        let response = post_form(&client, &format!("/events/{id}/rsvp"), &[]).await;
        assert_eq!(Status::SeeOther, response.status());
        let html = get_page(&client, &format!("/events/{id}")).await;
        assert!(section(&html, r#"<section id="attendees">"#, "</section>").contains("Lieutenant Okay"));
        assert!(html.contains("Cancel RSVP"));

        let response = post_form(&client, &format!("/events/{id}/rsvp/cancel"), &[]).await;
        assert_eq!(Status::SeeOther, response.status());
        let html = get_page(&client, &format!("/events/{id}")).await;
        assert!(!html.contains("Lieutenant Okay"));
        assert!(html.contains("RSVP for this event"));
    }

    #[rocket::async_test]
    async fn rsvping_twice_counts_once() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;

        post_form(&client, &format!("/events/{id}/rsvp"), &[]).await;
        post_form(&client, &format!("/events/{id}/rsvp"), &[]).await;

        let rsvps = repository(&client).await.get_rsvps(id).await.unwrap();
        assert_eq!(1, rsvps.len());
    }

    #[rocket::async_test]
    async fn rsvp_for_unknown_event_is_not_found() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;

        let response = post_form(&client, "/events/999/rsvp", &[]).await;

        assert_eq!(Status::NotFound, response.status());
    }
}

mod organizers {
    use super::*;

    #[rocket::async_test]
    async fn organizer_promotes_attendee() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        repository(&client)
            .await
            .add_rsvp(id, &UserUuid::from(LIEUTENANT))
            .await
            .unwrap();
        let html = get_page(&client, &format!("/events/{id}")).await;
        let attendees = section(&html, r#"<section id="attendees">"#, "</section>");
        assert!(attendees.contains("Lieutenant Okay"));
        assert!(attendees.contains("Make organizer"));

        let response = post_form(
            &client,
            &format!("/events/{id}/organizers"),
            &[("user_uuid", LIEUTENANT)],
        )
        .await;

        assert_eq!(Status::SeeOther, response.status());
        let mut repository = repository(&client).await;
        assert!(repository.is_organizer(id, &UserUuid::from(LIEUTENANT)).await.unwrap());
        let html = get_page(&client, &format!("/events/{id}")).await;
        assert!(section(&html, r#"<section id="organizers">"#, "</section>").contains("Lieutenant Okay"));
        assert!(!html.contains("Make organizer"));
    }

    #[rocket::async_test]
    async fn only_attendees_can_be_promoted() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;

        let response = post_form(
            &client,
            &format!("/events/{id}/organizers"),
            &[("user_uuid", LIEUTENANT)],
        )
        .await;

        assert_eq!(Status::UnprocessableEntity, response.status());
        let mut repository = repository(&client).await;
        assert!(!repository.is_organizer(id, &UserUuid::from(LIEUTENANT)).await.unwrap());
    }

    #[rocket::async_test]
    async fn attendees_may_not_promote_themselves() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;
        let id = create_event(&client, "This Thing").await;
        sign_in(&client, LIEUTENANT).await;
        post_form(&client, &format!("/events/{id}/rsvp"), &[]).await;

        let html = get_page(&client, &format!("/events/{id}")).await;
        assert!(!html.contains("Make organizer"));
        let response = post_form(
            &client,
            &format!("/events/{id}/organizers"),
            &[("user_uuid", LIEUTENANT)],
        )
        .await;

        assert_eq!(Status::Forbidden, response.status());
    }
}

mod access {
    use super::*;

    #[rocket::async_test]
    async fn anonymous_visitors_are_sent_to_login() {
        let client = client().await;

        let response = client.get("/events").dispatch().await;

        assert_eq!(Status::SeeOther, response.status());
        assert!(location(&response).starts_with("/login"));
    }

    #[rocket::async_test]
    async fn guests_may_not_see_events() {
        let client = client().await;
        sign_in(&client, VISITOR).await;

        let response = client.get("/events").dispatch().await;

        assert_eq!(Status::Forbidden, response.status());
        assert!(response.into_string().await.unwrap().contains("Forbidden"));
    }

    #[rocket::async_test]
    async fn signing_in_returns_to_the_requested_page() {
        let client = client().await;

        let response = post_form(&client, "/login?return=/events", &[("uuid", CAPTAIN)]).await;

        assert_eq!(Status::SeeOther, response.status());
        assert_eq!("/events", location(&response));
    }

    #[rocket::async_test]
    async fn unknown_uuid_cannot_sign_in() {
        let client = client().await;

        let response = post_form(&client, "/login", &[("uuid", "nobody-uuid")]).await;

        assert_eq!(Status::UnprocessableEntity, response.status());
        assert!(response
            .into_string()
            .await
            .unwrap()
            .contains("There is no user with this UUID"));
    }

    #[rocket::async_test]
    async fn signing_out_forgets_the_user() {
        let client = client().await;
        sign_in(&client, CAPTAIN).await;

        post_form(&client, "/logout", &[]).await;

        let response = client.get("/events").dispatch().await;
        assert_eq!(Status::SeeOther, response.status());
    }
}
