use crate::roster::config::DEFAULT_BOOTH_FILTER;
use dto::mobile_number_update::MobileNumberUpdate;
use dto::record::{Record, SerialNumber};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::{Arc, Mutex, OnceLock};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

static DEMO_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();

type DemoRoster = Arc<Mutex<Vec<Record>>>;

pub fn demo_mock_server_uri() -> &'static str {
    DEMO_MOCK_SERVER_URI
        .get()
        .map(String::as_str)
        .unwrap_or_default()
}

/// Start a fake roster API serving a handful of records, and keep it running for the app's lifetime.
pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    DEMO_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());

    let roster: DemoRoster = Arc::new(Mutex::new(demo_records()));
    mock_search(&mock_server, roster.clone()).await;
    mock_add_mobile(&mock_server, roster).await;
    mock_logo(&mock_server).await;

    // Dropping the server would shut it down.
    std::mem::forget(mock_server);
}

fn demo_records() -> Vec<Record> {
    let record = |id: &str, full_name: &str, srno: u64, age: u16, sex: &str, card_no: &str| {
        Record::new(
            id.to_owned(),
            full_name.to_owned(),
            SerialNumber::Number(srno),
            age,
            sex.to_owned(),
            card_no.to_owned(),
            DEFAULT_BOOTH_FILTER.to_owned(),
            None,
        )
    };

    vec![
        record("1", "Jane Doe", 1, 34, "F", "ABC1234567"),
        record("2", "John Doe", 2, 51, "M", "XYZ9876543").with_mobile_number("9123456780"),
        record("3", "Asha Patil", 3, 42, "F", "MHX0456123"),
        record("4", "Ravi Patil", 4, 45, "M", "MHX0456124"),
        Record::new(
            "5".to_owned(),
            "Jane Doe".to_owned(),
            SerialNumber::Text("17".to_owned()),
            29,
            "F".to_owned(),
            "DEF4561230".to_owned(),
            "12 Municipal Hall, Room No. 3, Dahanu".to_owned(),
            None,
        ),
    ]
}

// region Roster API
async fn mock_search(mock_server: &MockServer, roster: DemoRoster) {
    Mock::given(method("GET"))
        .and(path("/api/users/search"))
        .respond_with(move |request: &Request| {
            let Ok(records) = roster.lock() else {
                return ResponseTemplate::new(500);
            };
            let mut booth = None;
            let mut card_no = None;
            let mut name = None;
            for (key, value) in request.url.query_pairs() {
                match key.as_ref() {
                    "bootNo" => booth = Some(value.into_owned()),
                    "cardNo" => card_no = Some(value.into_owned()),
                    "name" => name = Some(value.to_lowercase()),
                    _ => {}
                }
            }

            let found: Vec<&Record> = records
                .iter()
                .filter(|record| booth.as_ref().is_none_or(|booth| record.boot() == booth))
                .filter(|record| card_no.as_ref().is_none_or(|card_no| record.has_card_no(card_no)))
                .filter(|record| {
                    name.as_ref()
                        .is_none_or(|name| record.full_name().to_lowercase().contains(name))
                })
                .collect();
            ResponseTemplate::new(200).set_body_json(found)
        })
        .mount(mock_server)
        .await;
}

async fn mock_add_mobile(mock_server: &MockServer, roster: DemoRoster) {
    Mock::given(method("PUT"))
        .and(path_regex("^/api/users/[^/]+/add-mobile$"))
        .respond_with(move |request: &Request| {
            let Ok(update) = request.body_json::<MobileNumberUpdate>() else {
                return ResponseTemplate::new(400);
            };
            let Some(record_id) = request.url.path().split('/').nth(3) else {
                return ResponseTemplate::new(404);
            };
            let Ok(mut records) = roster.lock() else {
                return ResponseTemplate::new(500);
            };
            match records.iter_mut().find(|record| record.id() == record_id) {
                Some(record) => {
                    *record = record.clone().with_mobile_number(update.mobile_number());
                    ResponseTemplate::new(200).set_body_json(&*record)
                }
                None => ResponseTemplate::new(404),
            }
        })
        .mount(mock_server)
        .await;
}
// endregion

// region Logo
async fn mock_logo(mock_server: &MockServer) {
    let banner = DynamicImage::ImageRgb8(RgbImage::from_fn(640, 200, |x, _| {
        if x < 213 {
            Rgb([255, 153, 51])
        } else if x < 426 {
            Rgb([255, 255, 255])
        } else {
            Rgb([19, 136, 8])
        }
    }));
    let mut bytes = Cursor::new(Vec::new());
    if let Err(error) = banner.write_to(&mut bytes, ImageFormat::Png) {
        error!("Can't generate demo logo: {error:#?}");
        return;
    }

    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(bytes.into_inner(), "image/png"))
        .mount(mock_server)
        .await;
}
// endregion
