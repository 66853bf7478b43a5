//! Command implementations.

use crate::cli::{AnalyzeArgs, ExtractArgs, RewriteArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clauselens_engine::{parse_analysis, AnalysisRequest, Analyzer, AnalyzerConfig};
use clauselens_llm::{OpenAiConfig, OpenAiProvider};
use std::fs;

/// Analyze a contract file through the model and print the structured result.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let contract_text = fs::read_to_string(&args.file)?;
    let analyzer = build_analyzer(config, args.api_key)?;

    let request = AnalysisRequest {
        contract_text,
        contract_type: args.contract_type,
        jurisdiction: args.jurisdiction,
        contractor_type: args.contractor_type,
        project_type: args.project_type,
        user_role: args.user_role,
    };

    let outcome = analyzer.analyze(request).await?;
    println!("{}", formatter.format_result(&outcome.result)?);
    eprintln!(
        "{}",
        formatter.success(&format!(
            "Analyzed with {} in {} ms",
            outcome.metadata.model_name, outcome.metadata.processing_time_ms
        ))
    );
    Ok(())
}

/// Parse a saved model transcript without touching the network.
pub fn execute_extract(args: ExtractArgs, formatter: &Formatter) -> Result<()> {
    let raw = fs::read_to_string(&args.file)?;
    let result = parse_analysis(&raw);

    if result.clauses.is_empty() {
        eprintln!(
            "{}",
            formatter.warning("No clause blocks recognized in the transcript")
        );
    }

    println!("{}", formatter.format_result(&result)?);
    Ok(())
}

/// Rewrite one clause through the rewrite collaborator.
pub async fn execute_rewrite(
    args: RewriteArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let clause_text = if args.from_file {
        fs::read_to_string(&args.clause)?
    } else {
        args.clause
    };

    if clause_text.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "clause text is empty; nothing to rewrite".to_string(),
        ));
    }

    let analyzer = build_analyzer(config, args.api_key)?;
    let rewritten = analyzer.rewrite_clause(&clause_text).await?;

    println!("{}", formatter.format_rewrite(&rewritten));
    Ok(())
}

/// Wire provider configuration from file, environment and flags.
fn build_analyzer(config: &Config, flag_key: Option<String>) -> Result<Analyzer<OpenAiProvider>> {
    let api_key = config.resolve_api_key(flag_key)?;

    let provider_config = OpenAiConfig::new(api_key)
        .with_endpoint(config.api.endpoint.clone())
        .with_model(config.api.model.clone())
        .with_timeout_secs(config.api.timeout_secs);
    let provider = OpenAiProvider::new(provider_config);
    let model_name = provider.model().to_string();

    let engine_config = AnalyzerConfig {
        request_timeout_secs: config.api.timeout_secs,
        ..AnalyzerConfig::default()
    };
    engine_config.validate()?;

    Ok(Analyzer::new(provider, engine_config).with_model_name(model_name))
}
