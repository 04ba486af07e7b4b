//! Task subcommands.
use std::io::Write;
use tqc_core::api::{CliError, NewTask, TaskClient, TaskFilter, TaskResult};

use crate::commands::cli::{AddArgs, CompleteArgs, ListArgs, OutputFormat, TaskIdArgs, UpdateArgs};
use crate::output;
use crate::utils::{parse_json_object, parse_json_value};

pub async fn handle_add<W: Write>(
    args: AddArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let metadata = args
        .metadata
        .as_deref()
        .map(|raw| parse_json_object("--metadata", raw))
        .transpose()?;

    let new_task = NewTask {
        title: args.title,
        description: args.desc,
        kind: args.kind,
        priority: args.priority,
        model_tier: args.tier,
        metadata,
    };
    let task = client.add_task(&new_task).await?;

    if format == OutputFormat::Text {
        writeln!(out, "Task added: #{}", task.id)?;
    }
    output::write_json(out, &task)
}

pub async fn handle_list<W: Write>(
    args: ListArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let filter = TaskFilter {
        status: args.status,
        agent: args.agent.filter(|a| !a.trim().is_empty()),
        kind: args.kind,
        limit: args.limit,
    };
    let tasks = client.list_tasks(&filter).await?;

    match format {
        OutputFormat::Text => output::write_task_list(out, &tasks)?,
        OutputFormat::Json => output::write_json(out, &tasks)?,
    }
    Ok(())
}

/// Prints the task, or `null` when the service sent no body.
pub async fn handle_get<W: Write>(
    args: TaskIdArgs,
    client: &TaskClient,
    out: &mut W,
) -> Result<(), CliError> {
    let task = client.get_task(args.task_id).await?;
    output::write_json(out, &task)
}

pub async fn handle_claim<W: Write>(
    args: TaskIdArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let task = client.claim_task(args.task_id).await?;

    if format == OutputFormat::Text {
        writeln!(out, "Task #{} claimed successfully", args.task_id)?;
    }
    match task {
        Some(task) => output::write_json(out, &task),
        None => Ok(()),
    }
}

pub async fn handle_update<W: Write>(
    args: UpdateArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let task = client.update_status(args.task_id, args.status).await?;

    match format {
        OutputFormat::Text => writeln!(
            out,
            "Task #{} status updated to: {}",
            args.task_id, args.status
        )?,
        OutputFormat::Json => {
            if let Some(task) = &task {
                output::write_json(out, task)?;
            }
        }
    }
    Ok(())
}

pub async fn handle_complete<W: Write>(
    args: CompleteArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let artifacts = args
        .artifacts
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_json_value("--artifacts", raw))
        .transpose()?;
    let result = TaskResult {
        description: args.result.filter(|r| !r.is_empty()),
        artifacts,
        ..TaskResult::default()
    };

    let task = client.complete_task(args.task_id, Some(result)).await?;

    match format {
        OutputFormat::Text => writeln!(out, "Task #{} completed", args.task_id)?,
        OutputFormat::Json => {
            if let Some(task) = &task {
                output::write_json(out, task)?;
            }
        }
    }
    Ok(())
}

pub async fn handle_cancel<W: Write>(
    args: TaskIdArgs,
    client: &TaskClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CliError> {
    client.cancel_task(args.task_id).await?;

    // The service returns no body, so JSON mode stays silent.
    if format == OutputFormat::Text {
        writeln!(out, "Task #{} cancelled", args.task_id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tqc_core::api::{ClientConfig, ClientError, ModelTier, TaskKind, TaskStatus};

    fn client_for(url: &str) -> TaskClient {
        let cfg = ClientConfig {
            api_url: url.to_string(),
            ..ClientConfig::default()
        };
        TaskClient::new(&cfg).unwrap()
    }

    fn task_json(id: u64, status: &str) -> String {
        json!({
            "id": id,
            "title": "x",
            "kind": "general",
            "priority": 50,
            "model_tier": "standard",
            "status": status,
            "claimed_by": null
        })
        .to_string()
    }

    fn add_args(title: &str, metadata: Option<&str>) -> AddArgs {
        AddArgs {
            title: title.to_string(),
            desc: None,
            kind: TaskKind::General,
            priority: 50,
            tier: ModelTier::Standard,
            metadata: metadata.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_add_prints_task_number_and_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/tasks")
            .with_status(201)
            .with_body(task_json(1, "queued"))
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_add(add_args("x", None), &client, OutputFormat::Text, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Task added: #1\n"));
        assert!(text.contains("\"status\": \"queued\""));
    }

    #[tokio::test]
    async fn test_add_forwards_metadata_unmodified() {
        let metadata = r#"{"repo":"core","nested":{"depth":2,"ok":true},"list":[1,"two",null]}"#;
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/tasks")
            .match_body(Matcher::PartialJson(json!({
                "metadata": serde_json::from_str::<serde_json::Value>(metadata).unwrap()
            })))
            .with_status(201)
            .with_body(task_json(2, "queued"))
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_add(add_args("x", Some(metadata)), &client, OutputFormat::Text, &mut out)
            .await
            .unwrap();
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_malformed_metadata_sends_nothing() {
        let mut server = Server::new_async().await;
        let m = server.mock("POST", "/tasks").expect(0).create_async().await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        let err = handle_add(add_args("x", Some("{nope")), &client, OutputFormat::Text, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Client(ClientError::InvalidJson { flag: "--metadata", .. })
        ));
        assert!(out.is_empty());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_empty_prints_notice() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/tasks")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let args = ListArgs {
            status: None,
            agent: None,
            kind: None,
            limit: 20,
        };
        let mut out = Vec::new();
        handle_list(args, &client, OutputFormat::Text, &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No tasks found.\n");
    }

    #[tokio::test]
    async fn test_list_json_format_prints_array() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/tasks")
            .match_query(Matcher::UrlEncoded("status".into(), "running".into()))
            .with_status(200)
            .with_body(format!("[{}]", task_json(5, "running")))
            .create_async()
            .await;

        let client = client_for(&server.url());
        let args = ListArgs {
            status: Some(TaskStatus::Running),
            agent: None,
            kind: None,
            limit: 20,
        };
        let mut out = Vec::new();
        handle_list(args, &client, OutputFormat::Json, &mut out)
            .await
            .unwrap();
        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed[0]["id"], json!(5));
    }

    #[tokio::test]
    async fn test_update_and_complete_messages() {
        let mut server = Server::new_async().await;
        let _u = server
            .mock("PATCH", "/tasks/4/status")
            .with_status(200)
            .with_body(task_json(4, "running"))
            .create_async()
            .await;
        let c = server
            .mock("POST", "/tasks/4/complete")
            .match_body(Matcher::Json(json!({
                "result": {"description": "all green", "artifacts": {"log": "ci.txt"}}
            })))
            .with_status(200)
            .with_body(task_json(4, "done"))
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_update(
            UpdateArgs {
                task_id: 4,
                status: TaskStatus::Running,
            },
            &client,
            OutputFormat::Text,
            &mut out,
        )
        .await
        .unwrap();
        handle_complete(
            CompleteArgs {
                task_id: 4,
                result: Some("all green".into()),
                artifacts: Some(r#"{"log":"ci.txt"}"#.into()),
            },
            &client,
            OutputFormat::Text,
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Task #4 status updated to: running\nTask #4 completed\n"
        );
        c.assert_async().await;
    }

    #[tokio::test]
    async fn test_claim_and_cancel_messages() {
        let mut server = Server::new_async().await;
        let _c = server
            .mock("POST", "/tasks/6/claim")
            .with_status(200)
            .with_body(task_json(6, "claimed"))
            .create_async()
            .await;
        let _d = server
            .mock("DELETE", "/tasks/6")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_claim(TaskIdArgs { task_id: 6 }, &client, OutputFormat::Text, &mut out)
            .await
            .unwrap();
        handle_cancel(TaskIdArgs { task_id: 6 }, &client, OutputFormat::Text, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Task #6 claimed successfully\n{"));
        assert!(text.ends_with("}\nTask #6 cancelled\n"));
    }

    #[tokio::test]
    async fn test_get_not_found_is_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/tasks/404")
            .with_status(404)
            .with_body(r#"{"detail":"Task not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        let err = handle_get(TaskIdArgs { task_id: 404 }, &client, &mut out)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("returned status 404"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_no_content_still_prints_success_lines() {
        let mut server = Server::new_async().await;
        let _u = server
            .mock("PATCH", "/tasks/3/status")
            .with_status(204)
            .create_async()
            .await;
        let _c = server
            .mock("POST", "/tasks/3/complete")
            .with_status(204)
            .create_async()
            .await;
        let _k = server
            .mock("POST", "/tasks/3/claim")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_update(
            UpdateArgs {
                task_id: 3,
                status: TaskStatus::Done,
            },
            &client,
            OutputFormat::Text,
            &mut out,
        )
        .await
        .unwrap();
        handle_complete(
            CompleteArgs {
                task_id: 3,
                result: None,
                artifacts: None,
            },
            &client,
            OutputFormat::Text,
            &mut out,
        )
        .await
        .unwrap();
        handle_claim(TaskIdArgs { task_id: 3 }, &client, OutputFormat::Text, &mut out)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Task #3 status updated to: done\nTask #3 completed\nTask #3 claimed successfully\n"
        );
    }

    #[tokio::test]
    async fn test_get_no_content_prints_null() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/tasks/8")
            .with_status(204)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_get(TaskIdArgs { task_id: 8 }, &client, &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "null\n");
    }

    #[tokio::test]
    async fn test_complete_empty_result_text_sends_empty_object() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/tasks/4/complete")
            .match_body(Matcher::Json(json!({})))
            .with_status(200)
            .with_body(task_json(4, "done"))
            .create_async()
            .await;

        let client = client_for(&server.url());
        let mut out = Vec::new();
        handle_complete(
            CompleteArgs {
                task_id: 4,
                result: Some(String::new()),
                artifacts: Some("  ".into()),
            },
            &client,
            OutputFormat::Text,
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Task #4 completed\n");
        m.assert_async().await;
    }
}
