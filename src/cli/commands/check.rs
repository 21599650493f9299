//! Check command implementation.
//!
//! `civic-audit check` obtains a bundle (from `--bundle` or the API), runs
//! the integrity engine once, and prints the report.

use std::fs;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;

use crate::api::{fetch_bundle, AuthHeader, CivicApi, HttpApiClient};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, validate, AuditConfig, ApiSettings};
use crate::error::{CivicAuditError, Result};
use crate::integrity::{
    evaluate, CheckContext, CheckRegistry, HumanFormatter, IntegrityCheckResult, JsonFormatter,
    OutputFormat, ReportFormatter,
};
use crate::model::Bundle;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_ISSUES, EXIT_USAGE};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Fetch the bundle through `api`, surfacing failed collections as warnings.
    pub fn fetch_from(
        &self,
        api: &dyn CivicApi,
        include_drafts: bool,
        ui: &mut dyn UserInterface,
    ) -> Bundle {
        let mut spinner = ui.start_spinner("Fetching bundle...");
        let outcome = fetch_bundle(api, include_drafts);

        if outcome.is_complete() {
            spinner.finish_success("Fetched bundle");
        } else {
            spinner.finish_warning(&format!(
                "Fetched bundle with {} unavailable collection(s)",
                outcome.failures.len()
            ));
        }

        for failure in &outcome.failures {
            ui.warning(&format!(
                "Could not fetch {}: {}",
                failure.collection, failure.message
            ));
        }

        outcome.bundle
    }

    /// Run the engine and print the report; returns the exit status.
    pub fn report(
        &self,
        bundle: &Bundle,
        config: &AuditConfig,
        registry: &CheckRegistry,
        ui: &mut dyn UserInterface,
    ) -> CommandResult {
        let now = self.args.now.unwrap_or_else(Utc::now);
        let context = CheckContext::new(now)
            .with_document_threshold(config.checks.unverified_document_threshold);

        tracing::debug!("Evaluating {} checks at {}", registry.len(), now);
        let result = evaluate(registry, bundle, &context);

        let format = self
            .args
            .format
            .or(config.output.format)
            .unwrap_or_default();
        let use_color = ui.use_color();
        ui.output(&render(&result, format, use_color));

        if format == OutputFormat::Human && ui.output_mode().shows_detail() {
            for outcome in &result.outcomes {
                ui.message(&format!(
                    "  {:<26} {} issue(s), {} hint(s)",
                    outcome.id.as_str(),
                    outcome.issues,
                    outcome.hints
                ));
            }
        }

        let has_hints = result.hints().next().is_some();
        if !result.passed || (self.args.strict && has_hints) {
            CommandResult::failure(EXIT_ISSUES)
        } else {
            CommandResult::success()
        }
    }

    fn load_bundle_file(&self, path: &Path, ui: &mut dyn UserInterface) -> Option<Bundle> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                ui.error(&format!("Cannot read bundle {}: {}", path.display(), e));
                return None;
            }
        };

        match Bundle::from_json_str(&content) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                ui.error(&format!("{} ({})", e, path.display()));
                None
            }
        }
    }

    fn api_client(
        &self,
        settings: &ApiSettings,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<HttpApiClient>> {
        let Some(base_url) = &settings.base_url else {
            ui.error(
                "No bundle given and no API configured. \
                 Pass --bundle or set api.base_url in .civic-audit/config.yml",
            );
            return Ok(None);
        };

        let timeout = Duration::from_secs(settings.timeout_secs);
        let mut client = HttpApiClient::new(base_url, timeout)?;
        match settings.token() {
            Some(token) => client = client.with_auth(AuthHeader::bearer(&token)),
            None => tracing::debug!("{} not set, sending no token", settings.token_env),
        }
        Ok(Some(client))
    }
}

/// Render a result in the given format.
pub fn render(result: &IntegrityCheckResult, format: OutputFormat, use_color: bool) -> String {
    let mut output = Vec::new();
    let written = match format {
        OutputFormat::Human => HumanFormatter::new(use_color).format(result, &mut output),
        OutputFormat::Json => JsonFormatter::new().format(result, &mut output),
    };
    if let Err(e) = written {
        tracing::warn!("Failed to render report: {}", e);
    }
    String::from_utf8_lossy(&output).into_owned()
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(
            &self.context.project_root,
            self.context.config_override(),
        ) {
            Ok(config) => config,
            Err(
                e @ (CivicAuditError::ConfigNotFound { .. }
                | CivicAuditError::ConfigParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_USAGE));
            }
            Err(e) => return Err(e),
        };

        let registry = CheckRegistry::with_builtins();
        if let Err(e) = validate(&config, &registry) {
            ui.error(&e.to_string());
            return Ok(CommandResult::failure(EXIT_USAGE));
        }
        let registry = registry.without(&config.checks.disabled);

        let bundle = match &self.args.bundle {
            Some(path) => match self.load_bundle_file(path, ui) {
                Some(bundle) => bundle,
                None => return Ok(CommandResult::failure(EXIT_USAGE)),
            },
            None => {
                let Some(client) = self.api_client(&config.api, ui)? else {
                    return Ok(CommandResult::failure(EXIT_USAGE));
                };
                let include_drafts = self.args.include_drafts || config.api.include_drafts;
                self.fetch_from(&client, include_drafts, ui)
            }
        };

        Ok(self.report(&bundle, &config, &registry, ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResponse, Statistics};
    use crate::ui::{MockUI, OutputMode, SpinnerFinish};
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    const CLEAN: &str = r#"{
        "politicians": [{"id": 1, "name": "Ada", "party": "P", "position": "Mayor",
                         "image": "a.png", "education_sources": ["https://e"],
                         "achievement_sources": ["https://a"], "position_sources": ["https://p"]}],
        "commitments": [{"id": "c1", "politician_id": 1, "sources": ["https://c"]}],
        "timeline_events": [{"id": "t1", "politician_id": 1, "date": "2024-01-01"}],
        "documents": [{"id": "d1", "politician_id": 1, "verified": true}],
        "voting_records": [{"id": "v1", "politician_id": 1, "date": "2024-02-01"}]
    }"#;

    fn args_for(bundle: &Path) -> CheckArgs {
        CheckArgs {
            bundle: Some(bundle.to_path_buf()),
            now: Some(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    fn project(bundle: &str, config: Option<&str>) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bundle.json");
        fs::write(&path, bundle).unwrap();
        if let Some(config) = config {
            let dir = temp.path().join(".civic-audit");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("config.yml"), config).unwrap();
        }
        (temp, path)
    }

    fn run(temp: &TempDir, args: CheckArgs, ui: &mut MockUI) -> CommandResult {
        CheckCommand::new(CommandContext::new(temp.path()), args)
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn clean_bundle_passes() {
        let (temp, bundle) = project(CLEAN, None);
        let mut ui = MockUI::new();

        let result = run(&temp, args_for(&bundle), &mut ui);

        assert_eq!(result, CommandResult::success());
        assert!(ui.output_text().contains("No integrity issues found"));
        assert!(ui.output_text().contains("Health score: 100% (9/9 checks passed)"));
    }

    #[test]
    fn uncited_commitment_fails() {
        let (temp, bundle) = project(
            r#"{"politicians": [{"id": 1, "name": "Ada"}],
                "commitments": [{"id": "c1", "politician_id": 1}]}"#,
            None,
        );
        let mut ui = MockUI::new();

        let result = run(&temp, args_for(&bundle), &mut ui);

        assert_eq!(result.exit_code, EXIT_ISSUES);
        assert!(ui
            .output_text()
            .contains("error[commitment-citations]: Commitment 'c1' has no source citations"));
    }

    #[test]
    fn strict_fails_on_hints() {
        let (temp, bundle) = project(r#"{"politicians": [{"id": 1, "name": "Ada"}]}"#, None);

        let mut ui = MockUI::new();
        assert!(run(&temp, args_for(&bundle), &mut ui).success);

        let mut ui = MockUI::new();
        let args = CheckArgs {
            strict: true,
            ..args_for(&bundle)
        };
        assert_eq!(run(&temp, args, &mut ui).exit_code, EXIT_ISSUES);
    }

    #[test]
    fn config_disables_checks_and_sets_format() {
        let (temp, bundle) = project(
            r#"{"commitments": [{"id": "c1", "politician_id": 9}]}"#,
            Some("checks:\n  disabled: [referential-integrity, commitment-citations]\noutput:\n  format: json\n"),
        );
        let mut ui = MockUI::new();

        let result = run(&temp, args_for(&bundle), &mut ui);
        let parsed: Value = serde_json::from_str(&ui.output_text()).unwrap();

        assert!(result.success);
        assert_eq!(parsed["passed"], true);
        assert_eq!(parsed["summary"]["total_checks"], 7);
    }

    #[test]
    fn format_flag_overrides_config() {
        let (temp, bundle) = project(CLEAN, Some("output:\n  format: json\n"));
        let mut ui = MockUI::new();
        let args = CheckArgs {
            format: Some(OutputFormat::Human),
            ..args_for(&bundle)
        };

        run(&temp, args, &mut ui);

        assert!(ui.output_text().starts_with("Health score"));
    }

    #[test]
    fn unknown_disabled_check_is_usage_error() {
        let (temp, bundle) = project(CLEAN, Some("checks:\n  disabled: [spelling]\n"));
        let mut ui = MockUI::new();

        let result = run(&temp, args_for(&bundle), &mut ui);

        assert_eq!(result.exit_code, EXIT_USAGE);
        assert!(ui.has_error("unknown check 'spelling'"));
    }

    #[test]
    fn bundle_shape_error_is_reported() {
        let (temp, bundle) = project("[1, 2, 3]", None);
        let mut ui = MockUI::new();

        let result = run(&temp, args_for(&bundle), &mut ui);

        assert_eq!(result.exit_code, EXIT_USAGE);
        assert!(ui.has_error("Invalid bundle"));
    }

    #[test]
    fn missing_bundle_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, args_for(&temp.path().join("nope.json")), &mut ui);

        assert_eq!(result.exit_code, EXIT_USAGE);
        assert!(ui.has_error("Cannot read bundle"));
    }

    #[test]
    fn verbose_mode_lists_outcomes() {
        let (temp, bundle) = project(CLEAN, None);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run(&temp, args_for(&bundle), &mut ui);

        assert!(ui.has_message("date-sanity"));
        assert!(ui.has_message("0 issue(s), 0 hint(s)"));
    }

    struct DocumentsDown;

    impl CivicApi for DocumentsDown {
        fn fetch_politicians(&self, _include_drafts: bool) -> ApiResponse<Vec<Value>> {
            ApiResponse::ok(vec![json!({"id": 1, "name": "Ada"})])
        }
        fn fetch_commitments(&self) -> ApiResponse<Vec<Value>> {
            ApiResponse::ok(vec![])
        }
        fn fetch_timeline_events(&self) -> ApiResponse<Vec<Value>> {
            ApiResponse::ok(vec![])
        }
        fn fetch_documents(&self) -> ApiResponse<Vec<Value>> {
            ApiResponse::failure("HTTP 502")
        }
        fn fetch_voting_records(&self) -> ApiResponse<Vec<Value>> {
            ApiResponse::ok(vec![])
        }
        fn fetch_statistics(&self) -> ApiResponse<Statistics> {
            ApiResponse::failure("unused")
        }
    }

    #[test]
    fn fetch_failures_become_warnings() {
        let command = CheckCommand::new(CommandContext::new("."), CheckArgs::default());
        let mut ui = MockUI::new();

        let bundle = command.fetch_from(&DocumentsDown, false, &mut ui);

        assert_eq!(bundle.politicians.len(), 1);
        assert!(ui.has_warning("Could not fetch documents: HTTP 502"));
        assert_eq!(
            ui.spinner_finishes(),
            vec![SpinnerFinish::Warning(
                "Fetched bundle with 1 unavailable collection(s)".to_string()
            )]
        );
    }

    #[test]
    fn render_json_is_parseable() {
        let result = evaluate(
            &CheckRegistry::with_builtins(),
            &Bundle::default(),
            &CheckContext::new(Utc::now()),
        );

        let parsed: Value =
            serde_json::from_str(&render(&result, OutputFormat::Json, false)).unwrap();

        assert_eq!(parsed["passed"], true);
    }
}
