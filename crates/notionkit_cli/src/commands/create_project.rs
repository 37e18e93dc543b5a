//! Create-project command - Create a project page from a template.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use tracing::info;

use notionkit_api::NotionApi;
use notionkit_templates::{Replacements, RequestBody, TemplateRenderer, DEFAULT_ICON};

use super::{parse_var, today};
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct CreateProjectArgs {
    /// Project name
    pub name: String,

    /// Parent page ID or friendly name from notion-config.json
    #[arg(long)]
    pub parent: String,

    /// Template name
    #[arg(long, default_value = "project-page")]
    pub template: String,

    /// Emoji icon for the project page
    #[arg(long, default_value = DEFAULT_ICON)]
    pub icon: String,

    /// Extra template placeholder value (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Print the full API response instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn execute<C>(args: CreateProjectArgs, settings: &Settings, client: &C) -> Result<Value>
where
    C: NotionApi + ?Sized,
{
    let parent_id = settings
        .resolver()
        .resolve(&args.parent)
        .context("Failed to resolve parent target")?;

    info!("Creating project page: {}", args.name);
    info!("  Parent: {} ({})", args.parent, parent_id);
    info!("  Template: {}", args.template);
    info!("  Icon: {}", args.icon);

    let template = settings.loader().load(&args.template)?;

    let replacements = project_replacements(&args.name, &args.vars);
    let document = TemplateRenderer::new().render(&template, &replacements);
    let body = RequestBody::new(document)
        .parent_page(parent_id)
        .icon(args.icon)
        .build()
        .with_context(|| format!("Template '{}' cannot be used as a page body", args.template))?;

    let result = client.create_page(&body).await?;
    Ok(result)
}

/// `PROJECT_NAME` and `DATE` first, then `--var` pairs, which may override either.
fn project_replacements(name: &str, vars: &[(String, String)]) -> Replacements {
    let mut replacements = Replacements::new()
        .with("PROJECT_NAME", name)
        .with("DATE", today());
    replacements.extend(vars.iter().cloned());
    replacements
}

/// Print the id and URL of the created page.
pub fn print_summary(result: &Value) {
    let id = result.get("id").and_then(Value::as_str).unwrap_or("");
    let url = result.get("url").and_then(Value::as_str).unwrap_or("");

    println!("Project page created!");
    println!("  ID:  {}", id);
    println!("  URL: {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use notionkit_api::MockNotionClient;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn project_root() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("notion-config.json"),
            json!({"targets": {"projects": {"id": "projects-id"}}}).to_string(),
        )
        .unwrap();
        fs::create_dir(dir.path().join("templates")).unwrap();
        fs::write(
            dir.path().join("templates").join("project-page.json"),
            json!({
                "object": "page",
                "properties": {"title": {"title": [{"text": {"content": "{{PROJECT_NAME}}"}}]}},
                "children": [
                    {"paragraph": {"rich_text": [{"text": {"content": "Started {{DATE}} by {{OWNER}}"}}]}}
                ]
            })
            .to_string(),
        )
        .unwrap();
        dir
    }

    fn args(name: &str) -> CreateProjectArgs {
        CreateProjectArgs {
            name: name.to_string(),
            parent: "projects".to_string(),
            template: "project-page".to_string(),
            icon: DEFAULT_ICON.to_string(),
            vars: Vec::new(),
            json: false,
        }
    }

    #[tokio::test]
    async fn test_create_project() {
        let dir = project_root();
        let settings = Settings::for_root(dir.path());
        let client = MockNotionClient::new();

        let result = execute(args("Apollo"), &settings, &client).await.unwrap();
        assert_eq!(result["url"], "https://www.notion.so/mock-page-id");

        let body = client.last_call().unwrap().payload.unwrap();
        assert_eq!(body["parent"], json!({"page_id": "projects-id"}));
        assert_eq!(body["icon"], json!({"type": "emoji", "emoji": "🚀"}));
        assert!(body.get("object").is_none());
        assert_eq!(
            body["properties"]["title"]["title"][0]["text"]["content"],
            "Apollo"
        );

        let text = body["children"][0]["paragraph"]["rich_text"][0]["text"]["content"]
            .as_str()
            .unwrap();
        assert!(text.starts_with("Started 20"));
        assert!(text.ends_with("by {{OWNER}}"));
    }

    #[tokio::test]
    async fn test_create_project_with_vars() {
        let dir = project_root();
        let settings = Settings::for_root(dir.path());
        let client = MockNotionClient::new();

        let mut project_args = args("Apollo");
        project_args.vars = vec![
            ("OWNER".to_string(), "Ada".to_string()),
            ("DATE".to_string(), "2024-03-01".to_string()),
        ];
        project_args.icon = "🛰️".to_string();
        execute(project_args, &settings, &client).await.unwrap();

        let body = client.last_call().unwrap().payload.unwrap();
        assert_eq!(
            body["children"][0]["paragraph"]["rich_text"][0]["text"]["content"],
            "Started 2024-03-01 by Ada"
        );
        assert_eq!(body["icon"]["emoji"], "🛰️");
    }

    #[test]
    fn test_project_replacement_order() {
        let vars = vec![("OWNER".to_string(), "Ada".to_string())];
        let replacements = project_replacements("Apollo", &vars);
        let keys: Vec<&str> = replacements.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["PROJECT_NAME", "DATE", "OWNER"]);
    }

    #[tokio::test]
    async fn test_project_name_var_overrides_positional() {
        let dir = project_root();
        let settings = Settings::for_root(dir.path());
        let client = MockNotionClient::new();

        let mut project_args = args("Apollo");
        project_args.vars = vec![("PROJECT_NAME".to_string(), "Artemis".to_string())];
        execute(project_args, &settings, &client).await.unwrap();

        let body = client.last_call().unwrap().payload.unwrap();
        assert_eq!(
            body["properties"]["title"]["title"][0]["text"]["content"],
            "Artemis"
        );
    }

    #[tokio::test]
    async fn test_unknown_parent_makes_no_request() {
        let dir = project_root();
        let settings = Settings::for_root(dir.path());
        let client = MockNotionClient::new();

        let mut project_args = args("Apollo");
        project_args.parent = "nowhere".to_string();
        let err = execute(project_args, &settings, &client).await.unwrap_err();

        assert!(format!("{:#}", err).contains("available targets: projects"));
        assert_eq!(client.call_count(), 0);
    }
}
