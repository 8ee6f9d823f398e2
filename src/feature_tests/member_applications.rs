use super::*;
use crate::database::Repository as _;

#[rocket::async_test]
async fn form_is_prefilled_with_the_applicant() {
    let client = client().await;
    sign_in(&client, VISITOR).await;

    let html = get_page(&client, "/member_applications/new").await;

    assert!(html.contains(&format!(r#"value="{VISITOR}""#)));
}

#[rocket::async_test]
async fn submitting_an_application_stores_it() {
    let client = client().await;
    sign_in(&client, VISITOR).await;

    let response = post_form(
        &client,
        "/member_applications",
        &[("content", "I would like to join."), ("user_uuid", VISITOR)],
    )
    .await;

    assert_eq!(Status::SeeOther, response.status());
    assert_eq!("/", location(&response));
    let html = get_page(&client, "/").await;
    assert!(html.contains("Application Submitted"));
    let applications = repository(&client)
        .await
        .get_member_applications(&UserUuid::from(VISITOR))
        .await
        .unwrap();
    assert_eq!(1, applications.len());
    assert_eq!("I would like to join.", applications[0].content);
}

#[rocket::async_test]
async fn unknown_fields_are_ignored() {
    let client = client().await;
    sign_in(&client, VISITOR).await;

    let response = post_form(
        &client,
        "/member_applications",
        &[
            ("content", "I would like to join."),
            ("user_uuid", VISITOR),
            ("admin", "1"),
        ],
    )
    .await;

    assert_eq!(Status::SeeOther, response.status());
    assert_eq!("/", location(&response));
    let applications = repository(&client)
        .await
        .get_member_applications(&UserUuid::from(VISITOR))
        .await
        .unwrap();
    assert_eq!(1, applications.len());
}

#[rocket::async_test]
async fn form_mentions_earlier_applications() {
    let client = client().await;
    sign_in(&client, VISITOR).await;
    let html = get_page(&client, "/member_applications/new").await;
    assert!(!html.contains("You have already submitted an application."));

    post_form(
        &client,
        "/member_applications",
        &[("content", "I would like to join."), ("user_uuid", VISITOR)],
    )
    .await;

    let html = get_page(&client, "/member_applications/new").await;
    assert!(html.contains("You have already submitted an application."));
}

#[rocket::async_test]
async fn blank_application_is_rejected() {
    let client = client().await;
    sign_in(&client, VISITOR).await;

    let response = post_form(
        &client,
        "/member_applications",
        &[("content", "  "), ("user_uuid", VISITOR)],
    )
    .await;

    assert_eq!(Status::UnprocessableEntity, response.status());
    assert!(response.into_string().await.unwrap().contains("error"));
    let applications = repository(&client)
        .await
        .get_member_applications(&UserUuid::from(VISITOR))
        .await
        .unwrap();
    assert!(applications.is_empty());
}

#[rocket::async_test]
async fn anonymous_visitors_must_sign_in_to_apply() {
    let client = client().await;

    let response = client.get("/member_applications/new").dispatch().await;

    assert_eq!(Status::SeeOther, response.status());
    assert!(location(&response).starts_with("/login"));
}
