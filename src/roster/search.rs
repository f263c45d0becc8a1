use crate::roster::config::RosterConfig;
use crate::roster::error::RosterError;
use crate::roster::error::RosterError::SearchFailed;
use crate::roster::search_query::SearchQuery;
use crate::tools::log_message_and_return;
use crate::web::error::WebError::{CantReadPageContent, ConnectionFailed, UnexpectedStatus};
use dto::record::Record;
use reqwest::Client;

/// Look records up on the roster API, then keep only those the query accepts.
/// Order of the remote answer is preserved.
pub async fn search_records(
    client: &Client,
    config: &RosterConfig,
    query: &SearchQuery,
) -> Result<Vec<Record>, RosterError> {
    let response = client
        .get(config.search_url())
        .query(&query.params())
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach roster search endpoint",
            SearchFailed(ConnectionFailed),
        ))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Roster search has been refused [status: {status}, query: {query:?}]");
        return Err(SearchFailed(UnexpectedStatus(status.as_u16())));
    }

    let records = response
        .json::<Vec<Record>>()
        .await
        .map_err(log_message_and_return(
            "Can't read records sent by roster search endpoint",
            SearchFailed(CantReadPageContent),
        ))?;

    let received = records.len();
    let records: Vec<Record> = records
        .into_iter()
        .filter(|record| query.accepts(record))
        .collect();
    trace!(
        "Roster search done [received: {received}, kept: {}, query: {query:?}]",
        records.len()
    );

    Ok(records)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::roster::config::tests::config_for;
    use dto::record::tests::{BOOTH, OTHER_BOOTH, jane_doe, jane_doe_elsewhere, john_doe};
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Make the mock server answer any search with `records`.
    pub async fn setup_search(mock_server: &MockServer, records: &[Record]) {
        Mock::given(method("GET"))
            .and(path("/api/users/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records))
            .mount(mock_server)
            .await;
    }

    #[async_test]
    async fn should_search_by_card_no() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/search"))
            .and(query_param("bootNo", BOOTH))
            .and(query_param("cardNo", "ABC123"))
            .and(query_param_is_missing("name"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![jane_doe()]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server.uri());
        let query = SearchQuery::new("abc123", BOOTH);
        let records = search_records(&Client::new(), &config, &query)
            .await
            .unwrap();

        assert_eq!(vec![jane_doe()], records);
    }

    #[async_test]
    async fn should_search_by_name() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/search"))
            .and(query_param("bootNo", BOOTH))
            .and(query_param("name", "Jane Doe"))
            .and(query_param_is_missing("cardNo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(vec![jane_doe(), jane_doe_elsewhere(), john_doe()]),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server.uri());
        let query = SearchQuery::new("Jane Doe", BOOTH);
        let records = search_records(&Client::new(), &config, &query)
            .await
            .unwrap();

        assert_eq!(vec![jane_doe(), john_doe()], records);
    }

    #[async_test]
    async fn should_drop_records_from_other_booth() {
        let mock_server = MockServer::start().await;
        setup_search(&mock_server, &[jane_doe().with_boot(OTHER_BOOTH)]).await;

        let config = config_for(&mock_server.uri());
        let query = SearchQuery::new("ABC123", BOOTH);
        let records = search_records(&Client::new(), &config, &query)
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[async_test]
    async fn should_drop_records_with_other_card_no() {
        let mock_server = MockServer::start().await;
        setup_search(
            &mock_server,
            &[jane_doe(), john_doe(), jane_doe().with_card_no("abc123")],
        )
        .await;

        let config = config_for(&mock_server.uri());
        let query = SearchQuery::new("ABC123", BOOTH);
        let records = search_records(&Client::new(), &config, &query)
            .await
            .unwrap();

        assert_eq!(vec![jane_doe(), jane_doe().with_card_no("abc123")], records);
    }

    #[async_test]
    async fn should_fail_to_search_when_status_is_not_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server.uri());
        let query = SearchQuery::new("ABC123", BOOTH);
        let error = search_records(&Client::new(), &config, &query)
            .await
            .unwrap_err();

        assert_eq!(SearchFailed(UnexpectedStatus(500)), error);
    }

    #[async_test]
    async fn should_fail_to_search_when_body_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Maintenance</html>"))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server.uri());
        let query = SearchQuery::new("ABC123", BOOTH);
        let error = search_records(&Client::new(), &config, &query)
            .await
            .unwrap_err();

        assert_eq!(SearchFailed(CantReadPageContent), error);
    }

    #[async_test]
    async fn should_fail_to_search_when_unreachable() {
        let config = config_for("http://127.0.0.1:9");
        let query = SearchQuery::new("ABC123", BOOTH);
        let error = search_records(&Client::new(), &config, &query)
            .await
            .unwrap_err();

        assert_eq!(SearchFailed(ConnectionFailed), error);
    }
}
