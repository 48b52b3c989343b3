use crate::{Api, DigestWorld};
use cucumber::{given, then, when};
use issue_digest::Error;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_SIZE: usize = 100;

fn api(world: &DigestWorld) -> &MockServer {
    &world.api.as_ref().expect("Background must start the API").0
}

fn issues_path(repo: &str) -> String {
    format!("/repos/{repo}/issues")
}

/// Interleaves issues and pull requests, numbering records by position.
fn listing_records(repo: &str, issues: usize, pull_requests: usize) -> Vec<serde_json::Value> {
    let mut kinds = Vec::with_capacity(issues + pull_requests);
    let (mut i, mut p) = (0, 0);
    while i < issues || p < pull_requests {
        if i < issues {
            kinds.push(false);
            i += 1;
        }
        if p < pull_requests {
            kinds.push(true);
            p += 1;
        }
    }

    kinds
        .into_iter()
        .enumerate()
        .map(|(idx, is_pr)| {
            let number = idx + 1;
            if is_pr {
                serde_json::json!({
                    "number": number,
                    "title": format!("Pull request {number}"),
                    "body": "Implements a change. Details follow.",
                    "html_url": format!("https://github.com/{repo}/pull/{number}"),
                    "pull_request": {"url": format!("https://api.github.com/repos/{repo}/pulls/{number}")}
                })
            } else {
                serde_json::json!({
                    "number": number,
                    "title": format!("Issue {number}"),
                    "body": format!("Problem number {number}. Steps to reproduce follow."),
                    "html_url": format!("https://github.com/{repo}/issues/{number}")
                })
            }
        })
        .collect()
}

#[given("a GitHub API is available")]
async fn given_api_available(world: &mut DigestWorld) {
    let server = MockServer::start().await;
    world
        .env
        .insert("GITHUB_API_URL".to_string(), server.uri());
    world.api = Some(Api(server));
}

#[given(regex = r#"^the repository "([^"]+)" has (\d+) issues and (\d+) pull requests$"#)]
async fn given_repository_listing(
    world: &mut DigestWorld,
    repo: String,
    issues: usize,
    pull_requests: usize,
) {
    let records = listing_records(&repo, issues, pull_requests);
    let server = api(world);

    for (idx, page) in records.chunks(PAGE_SIZE).enumerate() {
        Mock::given(method("GET"))
            .and(path(issues_path(&repo)))
            .and(query_param("page", (idx + 1).to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(page))
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path(issues_path(&repo)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .with_priority(10)
        .mount(server)
        .await;
}

#[given(regex = r#"^the repository "([^"]+)" does not exist$"#)]
async fn given_repository_missing(world: &mut DigestWorld, repo: String) {
    Mock::given(method("GET"))
        .and(path(issues_path(&repo)))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest/issues/issues#list-repository-issues"
        })))
        .mount(api(world))
        .await;
}

#[given(regex = r#"^the repository "([^"]+)" answers with a JSON object$"#)]
async fn given_repository_answers_object(world: &mut DigestWorld, repo: String) {
    Mock::given(method("GET"))
        .and(path(issues_path(&repo)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
        )
        .mount(api(world))
        .await;
}

#[given(regex = r#"^GITHUB_REPO is "([^"]*)"$"#)]
async fn given_github_repo(world: &mut DigestWorld, repo: String) {
    world.env.insert("GITHUB_REPO".to_string(), repo);
}

#[when(regex = r"^I run `issue-digest ?([^`]*)`$")]
async fn when_run_issue_digest(world: &mut DigestWorld, rest: String) {
    let args: Vec<String> = std::iter::once("issue-digest".to_string())
        .chain(rest.split_whitespace().map(str::to_string))
        .collect();

    let mut buffer: Vec<u8> = Vec::new();
    let writer_option: Option<&mut dyn std::io::Write> = Some(&mut buffer);
    let env = world.env.clone();

    let result = issue_digest::run::run(
        args,
        move |key| env.get(key).cloned(),
        &world.notifier,
        writer_option,
    )
    .await;

    world.captured_output = buffer;
    world.run_result = Some(result);
}

#[then("the run should succeed")]
async fn then_run_succeeds(world: &mut DigestWorld) {
    match world.run_result.as_ref().expect("run was not executed") {
        Ok(()) => {}
        Err(err) => panic!("Expected success, but the run failed: {err:#}"),
    }
}

fn run_error(world: &DigestWorld) -> &Error {
    let err = match world.run_result.as_ref().expect("run was not executed") {
        Ok(()) => panic!("Expected the run to fail, but it succeeded"),
        Err(err) => err,
    };
    err.downcast_ref::<Error>()
        .unwrap_or_else(|| panic!("Expected an issue_digest::Error, got: {err:#}"))
}

#[then("the run should fail with a configuration error")]
async fn then_configuration_error(world: &mut DigestWorld) {
    let err = run_error(world);
    assert!(
        matches!(err, Error::Configuration(_)),
        "Expected a configuration error, got: {err}"
    );
}

#[then(regex = r"^the run should fail with a transport error for status (\d+)$")]
async fn then_transport_error(world: &mut DigestWorld, status: u16) {
    let err = run_error(world);
    assert!(
        matches!(err, Error::Transport { .. }),
        "Expected a transport error, got: {err}"
    );
    assert_eq!(err.status(), Some(status));
    assert!(
        err.to_string().contains(&status.to_string()),
        "Expected the message to name the status, got: {err}"
    );
}

#[then("the run should fail with a protocol error")]
async fn then_protocol_error(world: &mut DigestWorld) {
    let err = run_error(world);
    assert!(
        matches!(err, Error::Protocol(_)),
        "Expected a protocol error, got: {err}"
    );
}

#[then(regex = r#"^the output should contain "(.*)"$"#)]
async fn then_output_contains(world: &mut DigestWorld, expected: String) {
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert!(
        output.contains(&expected),
        "Expected output to contain '{}', but got:\n---\n{}\n---",
        expected,
        output
    );
}

#[then(regex = r"^the notifier should receive a message with (\d+) numbered blocks$")]
async fn then_numbered_blocks(world: &mut DigestWorld, blocks: usize) {
    let messages = world.notifier.messages.lock().unwrap();
    assert_eq!(messages.len(), 1, "Expected exactly one notification");
    let re = regex::Regex::new(r"(?m)^\*\d+\. ").unwrap();
    assert_eq!(
        re.find_iter(&messages[0]).count(),
        blocks,
        "Unexpected block count in:\n{}",
        messages[0]
    );
}

#[then(regex = r#"^the notification should contain "(.*)"$"#)]
async fn then_notification_contains(world: &mut DigestWorld, expected: String) {
    let messages = world.notifier.messages.lock().unwrap();
    assert!(
        messages.iter().any(|m| m.contains(&expected)),
        "No notification contains '{}': {:?}",
        expected,
        messages
    );
}

#[then("the notifier should not have been called")]
async fn then_notifier_not_called(world: &mut DigestWorld) {
    assert!(world.notifier.messages.lock().unwrap().is_empty());
}

#[then(regex = r"^(\d+) page requests? should have been made$")]
async fn then_page_requests(world: &mut DigestWorld, expected: usize) {
    let requests = api(world)
        .received_requests()
        .await
        .expect("request recording is enabled");
    let page_requests = requests
        .iter()
        .filter(|r| r.url.path().ends_with("/issues"))
        .count();
    assert_eq!(page_requests, expected);
}
