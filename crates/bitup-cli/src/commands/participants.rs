//! Participants listing - one GET rendered as a table.

use crate::error::AppResult;
use registry_client::{Participant, RegistryClient};
use tracing::warn;

const HEADERS: [&str; 6] = [
    "ID",
    "Full Name",
    "Email",
    "Discord User",
    "Motivation",
    "Bootcamp Choices",
];

const FETCH_FAILED: &str = "Failed to load participants. Check your backend connection.\n";

/// Fetch and render the participant table.
///
/// Three mutually exclusive presentations: the loading line, the table
/// (header row always, zero or more data rows), or the static failure
/// message. No retry.
pub async fn run(client: &RegistryClient) -> AppResult<()> {
    println!("Loading participants...");
    print!("{}", fetch_and_render(client).await);
    Ok(())
}

async fn fetch_and_render(client: &RegistryClient) -> String {
    match client.list().await {
        Ok(participants) => render_table(&participants),
        Err(e) => {
            warn!("Listing failed: {}", e);
            FETCH_FAILED.into()
        }
    }
}

fn render_table(participants: &[Participant]) -> String {
    let rows: Vec<[String; 6]> = participants
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.full_name.clone(),
                p.email.clone(),
                p.discord_user.clone(),
                p.motivation.clone(),
                if p.bootcamp_choices.is_empty() {
                    "None".into()
                } else {
                    p.bootcamp_choices.join(", ")
                },
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    push_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn participant(id: i64, choices: &[&str]) -> Participant {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "discordUser": "janed",
            "motivation": "Want to learn",
            "bootcampChoices": choices,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_list_renders_header_only() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.lines().collect();

        // Header row and rule, zero data rows. Not an error state.
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].contains("Bootcamp Choices"));
        assert!(lines[1].starts_with("--"));
    }

    #[test]
    fn test_rows_follow_header() {
        let table = render_table(&[
            participant(1, &["Frontend"]),
            participant(2, &["Frontend", "Backend"]),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("1 "));
        assert!(lines[2].contains("Jane Doe"));
        assert!(lines[3].ends_with("Frontend, Backend"));
    }

    #[test]
    fn test_empty_choices_render_as_none() {
        let table = render_table(&[participant(5, &[])]);

        assert!(table.lines().nth(2).unwrap().ends_with("None"));
    }

    #[tokio::test]
    async fn test_fetch_empty_renders_table_not_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ParticipantAPI"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client =
            RegistryClient::new(mock_server.uri(), std::time::Duration::from_secs(5)).unwrap();
        let rendered = fetch_and_render(&client).await;

        assert!(rendered.starts_with("ID"));
        assert_ne!(rendered, FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_fetch_rejection_renders_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/ParticipantAPI"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client =
            RegistryClient::new(mock_server.uri(), std::time::Duration::from_secs(5)).unwrap();
        let rendered = fetch_and_render(&client).await;

        assert_eq!(rendered, FETCH_FAILED);
    }
}
