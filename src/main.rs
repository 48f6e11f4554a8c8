mod cli;
mod render;

use anyhow::Context;
use clap::Parser;
use cli::{Args, OutputFormat};
use fineprint::{
    preview, AnalysisGateway, AnalysisRequest, AnalysisSettings, Credential, DocumentIngestor,
    FinePrintAnalyzer, FinePrintError, ProviderRegistry, DEFAULT_PREVIEW_CHARS, SAMPLE_DOCUMENT,
};
use render::{render_html, render_json, render_text};
use serde_json::json;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    let registry = ProviderRegistry::builtin();

    if args.list_providers {
        list_providers(registry);
        return Ok(ExitCode::SUCCESS);
    }

    let descriptor = registry.lookup(&args.provider)?;
    let credential = Credential::from_env(descriptor).ok_or_else(|| {
        FinePrintError::missing_credential(&descriptor.label, &descriptor.credential_env_var)
    })?;
    let settings = AnalysisSettings::from_env()?;
    let document = load_document(&args)?;
    if args.preview {
        eprintln!("{}\n", preview(&document, DEFAULT_PREVIEW_CHARS));
    }

    let gateway = AnalysisGateway::with_registry(registry.clone());
    let analyzer = FinePrintAnalyzer::new(gateway, settings);
    let request = AnalysisRequest::new(document, credential, &descriptor.label);

    let (scores, report, header) = if args.scores_only {
        (analyzer.get_risk_scores(&request).await, None, None)
    } else {
        let outcome = analyzer.analyze(&request).await;
        let header = json!({
            "analysis_id": outcome.analysis_id,
            "started_at": outcome.started_at,
            "completed_at": outcome.completed_at,
        });
        (outcome.scores, Some(outcome.report), Some(header))
    };

    let rendered = match args.output {
        OutputFormat::Text => render_text(&request.provider_label, &scores, report.as_ref()),
        OutputFormat::Html => render_html(&scores, report.as_ref()),
        OutputFormat::Json => {
            render_json(&request.provider_label, header, &scores, report.as_ref())?
        }
    };
    println!("{rendered}");

    let failed = scores.is_err() || report.as_ref().is_some_and(|r| r.is_err());
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn list_providers(registry: &ProviderRegistry) {
    for descriptor in registry.descriptors() {
        let configured = Credential::from_env(descriptor).is_some();
        println!(
            "{:<22} {:<28} {} ({})",
            descriptor.label,
            descriptor.model_id,
            descriptor.credential_env_var,
            if configured { "set" } else { "not set" }
        );
    }
}

fn load_document(args: &Args) -> anyhow::Result<String> {
    if args.sample {
        return Ok(SAMPLE_DOCUMENT.to_string());
    }

    match &args.file {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(DocumentIngestor::default().extract_text(&bytes, "", &file_name)?)
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read document from stdin")?;
            Ok(text)
        }
    }
}
