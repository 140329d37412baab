use super::fetch_utils::post_form_text;
use super::session::Session;
use crate::constants::xml::LOGIN_SUCCESS_CODE;
use crate::data_fetcher::processors::parse_login_code;
use crate::error::AppError;
use tracing::{error, info, instrument, warn};

/// Logs in with the account's credentials.
///
/// On success the service's session cookies are stored in the session's
/// cookie jar and sent with every later request made through `session`.
///
/// # Errors
/// * `AppError::LoginRejected` - the service answered with a code other than `loginsuccess`
/// * `AppError::FeedMissingElement` - the response has no `result/code` element
/// * transport, status and XML errors from the request itself
#[instrument(skip(session, password))]
pub async fn login(session: &Session, username: &str, password: &str) -> Result<(), AppError> {
    let url = &session.endpoints().login_url;
    let form = [("username", username), ("password", password)];

    let body = post_form_text(session.client(), url, &form)
        .await
        .inspect_err(|e| error!("Unable to login: {e}"))?;

    let code = parse_login_code(&body)?.ok_or_else(|| {
        warn!("Login response from {url} has no result/code element");
        AppError::feed_missing_element("result/code")
    })?;

    if code == LOGIN_SUCCESS_CODE {
        info!("Logged in as {username}");
        Ok(())
    } else {
        warn!("Login for {username} rejected with code '{code}'");
        Err(AppError::login_rejected(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use crate::testing_utils::TestDataBuilder;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, method, path},
    };

    fn session_for(mock_server: &MockServer) -> Session {
        Session::with_endpoints(Endpoints::with_base_url(&mock_server.uri()), 5).unwrap()
    }

    async fn mount_login(mock_server: &MockServer, code: &str) {
        Mock::given(method("POST"))
            .and(path("/mlsmdl/secure/login"))
            .and(body_string_contains("username=fan"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(TestDataBuilder::login_response_xml(code)),
            )
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_login_success() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, "loginsuccess").await;

        let session = session_for(&mock_server);
        assert!(login(&session, "fan", "secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_login_rejected_code() {
        let mock_server = MockServer::start().await;
        mount_login(&mock_server, "loginfailed").await;

        let session = session_for(&mock_server);
        let error = login(&session, "fan", "wrong").await.unwrap_err();
        assert!(
            matches!(error, AppError::LoginRejected { ref code } if code == "loginfailed"),
            "unexpected error: {error:?}"
        );
    }

    #[tokio::test]
    async fn test_login_response_without_code() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mlsmdl/secure/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<response><ok/></response>"))
            .mount(&mock_server)
            .await;

        let session = session_for(&mock_server);
        let error = login(&session, "fan", "secret").await.unwrap_err();
        assert!(matches!(error, AppError::FeedMissingElement { .. }));
    }

    #[tokio::test]
    async fn test_login_truncated_success_body_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mlsmdl/secure/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<response><result><code>loginsuccess</code>"),
            )
            .mount(&mock_server)
            .await;

        let session = session_for(&mock_server);
        let error = login(&session, "fan", "secret").await.unwrap_err();
        assert!(matches!(error, AppError::XmlParse(_)), "unexpected error: {error:?}");
    }

    #[tokio::test]
    async fn test_login_transport_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mlsmdl/secure/login"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let session = session_for(&mock_server);
        let error = login(&session, "fan", "secret").await.unwrap_err();
        assert!(matches!(error, AppError::ApiServiceUnavailable { .. }));
    }
}
