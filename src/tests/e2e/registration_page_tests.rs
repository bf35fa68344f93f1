// End to end walk through the registration page, in the order a visitor would
// click through it: empty form, bad name, bad email, bad phone, then a good one.
// Every bad submission must leave the single seed row in place.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use scraper::{Html, Selector};
use tower::ServiceExt;

use crate::modules::members::adapters::outbound::member_store_in_memory::InMemoryMemberStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::register_member::{
    EMAIL_FORMAT_OK, NAME_FORMAT_OK, PHONE_FORMAT_OK,
};

const NAME_FORMAT_BAD: &str = "John1";
const NAME_FORMAT_TOO_LONG: &str = "John Doe John Doe John Doe";
const EMAIL_FORMAT_BAD_1: &str = "joe";
const EMAIL_FORMAT_BAD_2: &str = "john@doe.com ";
const PHONE_FORMAT_BAD_ILLEGAL_CHARS: &str = "as/df.123@";
const PHONE_FORMAT_BAD_TOO_LONG: &str = "12345678901234567890";
const PHONE_FORMAT_BAD_TOO_SHORT: &str = "123456789";

struct Page {
    html: String,
}

impl Page {
    fn document(&self) -> Html {
        Html::parse_document(&self.html)
    }

    /// Whether the validation message element for the input `id` is on the page.
    fn shows_error(&self, id: &str) -> bool {
        self.error_text(id).is_some()
    }

    fn error_text(&self, id: &str) -> Option<String> {
        let selector = Selector::parse(&format!("[id=\"{id}.errors\"]")).unwrap();
        let document = self.document();
        let text: Option<String> = document.select(&selector).next().map(|e| e.text().collect());
        text
    }

    /// Cell texts of every row of the members table, top to bottom.
    fn member_rows(&self) -> Vec<Vec<String>> {
        let rows = Selector::parse("table.simpletablestyle tbody tr").unwrap();
        let cells = Selector::parse("td").unwrap();
        let document = self.document();
        let members: Vec<Vec<String>> = document
            .select(&rows)
            .map(|row| {
                row.select(&cells)
                    .map(|cell| cell.text().collect::<String>())
                    .collect()
            })
            .collect();
        members
    }
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn open(app: &Router) -> Page {
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    Page {
        html: body_text(response).await,
    }
}

/// Submits the form and follows the redirect the way a browser would.
async fn register(app: &Router, name: &str, email: &str, phone: &str) -> Page {
    let body = format!(
        "name={}&email={}&phone={}",
        urlencoding::encode(name),
        urlencoding::encode(email),
        urlencoding::encode(phone)
    );
    let response = app
        .clone()
        .oneshot(
            Request::post("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    match response.status() {
        StatusCode::SEE_OTHER => open(app).await,
        StatusCode::OK => Page {
            html: body_text(response).await,
        },
        status => panic!("unexpected status {status}"),
    }
}

#[fixture]
fn app() -> Router {
    router(AppState::in_memory(InMemoryMemberStore::seeded()))
}

#[rstest]
#[tokio::test]
async fn it_should_show_the_seed_member_on_a_fresh_page(app: Router) {
    let page = open(&app).await;
    assert_eq!(page.member_rows().len(), 1);
    assert!(!page.shows_error("name"));
}

#[rstest]
#[tokio::test]
async fn it_should_flag_every_field_of_an_empty_registration(app: Router) {
    let page = register(&app, "", "", "").await;
    assert!(page.shows_error("name"), "Name validation message should be present");
    assert!(page.shows_error("email"), "Email validation message should be present");
    assert!(page.shows_error("phoneNumber"), "Phone validation message should be present");
    assert_eq!(page.member_rows().len(), 1, "Member should not be registered");
}

#[rstest]
#[case::bad_format(NAME_FORMAT_BAD)]
#[case::too_long(NAME_FORMAT_TOO_LONG)]
#[tokio::test]
async fn it_should_reject_a_bad_name(app: Router, #[case] name: &str) {
    let page = register(&app, name, EMAIL_FORMAT_OK, PHONE_FORMAT_OK).await;
    assert!(page.shows_error("name"), "Name validation message should be present");
    assert!(!page.shows_error("email"));
    assert!(!page.shows_error("phoneNumber"));
    assert_eq!(page.member_rows().len(), 1, "Member should not be registered");
}

#[rstest]
#[case::no_domain(EMAIL_FORMAT_BAD_1)]
#[case::trailing_space(EMAIL_FORMAT_BAD_2)]
#[tokio::test]
async fn it_should_reject_a_bad_email(app: Router, #[case] email: &str) {
    let page = register(&app, NAME_FORMAT_OK, email, PHONE_FORMAT_OK).await;
    assert!(page.shows_error("email"));
    assert!(!page.shows_error("name"));
    assert_eq!(page.member_rows().len(), 1, "Member should not be registered");
}

#[rstest]
#[case::illegal_chars(PHONE_FORMAT_BAD_ILLEGAL_CHARS)]
#[case::too_short(PHONE_FORMAT_BAD_TOO_SHORT)]
#[case::too_long(PHONE_FORMAT_BAD_TOO_LONG)]
#[tokio::test]
async fn it_should_reject_a_bad_phone(app: Router, #[case] phone: &str) {
    let page = register(&app, NAME_FORMAT_OK, EMAIL_FORMAT_OK, phone).await;
    assert!(page.shows_error("phoneNumber"));
    assert!(!page.shows_error("email"));
    assert_eq!(page.member_rows().len(), 1, "Member should not be registered");
}

#[rstest]
#[tokio::test]
async fn it_should_walk_through_the_whole_registration_sequence(app: Router) {
    register(&app, "", "", "").await;
    register(&app, NAME_FORMAT_BAD, EMAIL_FORMAT_OK, PHONE_FORMAT_OK).await;
    register(&app, NAME_FORMAT_OK, EMAIL_FORMAT_BAD_2, PHONE_FORMAT_OK).await;
    register(&app, NAME_FORMAT_OK, EMAIL_FORMAT_OK, PHONE_FORMAT_BAD_TOO_LONG).await;

    let page = register(&app, NAME_FORMAT_OK, EMAIL_FORMAT_OK, PHONE_FORMAT_OK).await;

    let rows = page.member_rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|columns| columns.len() == 5));
    assert_eq!(rows[0][1], NAME_FORMAT_OK);
    assert_eq!(rows[0][2], EMAIL_FORMAT_OK);
    assert_eq!(rows[0][3], PHONE_FORMAT_OK);
    assert_eq!(rows[1][1], "John Smith");
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_to_register_the_same_email_twice(app: Router) {
    register(&app, NAME_FORMAT_OK, EMAIL_FORMAT_OK, PHONE_FORMAT_OK).await;

    let page = register(&app, "Jane Roe", EMAIL_FORMAT_OK, PHONE_FORMAT_OK).await;

    assert_eq!(page.error_text("email").as_deref(), Some("Email taken"));
    assert_eq!(page.member_rows().len(), 2);
}
