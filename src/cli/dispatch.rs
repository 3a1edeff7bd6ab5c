// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::Term;

use crate::commit::{clean_message, render_template};
use crate::config::{example_config, CmlConfig};
use crate::error::{CmlError, ConfigError, Result, ResultExt};
use crate::report::Reporter;
use crate::rules::{builtin_rules, RuleEngine};

use super::args::{CheckArgs, Cli, Commands, InitArgs, OutputFormat, TemplateArgs};
use super::input::Input;

/// Run the CLI with the given arguments and return the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CmlConfig::load_from(config_path)?
    } else {
        CmlConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Rules => run_rules(&cli, &config).map(|_| 0),
        Commands::Template(args) => run_template(&config, args).map(|_| 0),
        Commands::Init(args) => run_init(args).map(|_| 0),
        Commands::Version => run_version().map(|_| 0),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CmlConfig, args: CheckArgs) -> Result<i32> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::from_config(&config.rules);
    let format = cli.output_format();
    let reporter = Reporter::new(format)
        .with_strict(args.strict || config.output.strict)
        .with_color(config.output.color && !args.no_color)
        .with_hints(config.output.hints && Term::stdout().is_term());
    let strip = config.input.strip_comments && !args.keep_comments;

    let inputs = Input::from_args(&args);
    let multiple = inputs.len() > 1;
    let mut exit_code = 0;
    let mut documents = Vec::new();

    for input in &inputs {
        // A failed read rejects this input only; the others still run
        let raw = match input.read() {
            Ok(raw) => raw,
            Err(err) => {
                exit_code = 1;
                match format {
                    OutputFormat::Json => documents.push(serde_json::json!({
                        "input": input.name(),
                        "valid": false,
                        "error": err.to_string(),
                    })),
                    OutputFormat::Text => eprintln!("Error: {}", err),
                }
                continue;
            }
        };

        let cleaned = clean_message(&raw, strip);
        let mut violations = engine.check_str(&cleaned.text);
        for violation in &mut violations {
            violation.line = cleaned.source_line(violation.line);
        }

        let report = reporter.render(&violations);
        tracing::debug!("{}: {}", input.name(), report.summary());
        if !report.is_success() {
            exit_code = 1;
        }

        match format {
            OutputFormat::Json => {
                let mut document = reporter.json_value(&violations);
                document["input"] = serde_json::Value::String(input.name());
                documents.push(document);
            }
            OutputFormat::Text => {
                if multiple {
                    println!("{}:", input.name());
                }
                println!("{}", report.text);
            }
        }
    }

    if format == OutputFormat::Json {
        let json = if multiple {
            serde_json::Value::Array(documents)
        } else {
            documents.pop().unwrap_or_default()
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    Ok(exit_code)
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &CmlConfig) -> Result<()> {
    let engine = RuleEngine::from_config(&config.rules);
    let is_enabled = |name: &str| engine.rules().rules().iter().any(|rule| rule.name == name);

    if cli.output_format() == OutputFormat::Json {
        let rules: Vec<_> = builtin_rules()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "name": rule.name,
                    "description": rule.description,
                    "enabled": is_enabled(rule.name),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rules).unwrap_or_default()
        );
        return Ok(());
    }

    for rule in builtin_rules() {
        let status = if is_enabled(rule.name) {
            ""
        } else {
            " (disabled)"
        };
        println!("{:<28} {}{}", rule.name, rule.description, status);
    }

    Ok(())
}

/// Run the template command.
fn run_template(config: &CmlConfig, args: TemplateArgs) -> Result<()> {
    let template = render_template(&config.rules)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &template).context("template")?;
            println!("✓ Wrote commit template to {}", path.display());
            println!("  Use it with: git config commit.template {}", path.display());
        }
        None => print!("{}", template),
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("cml.toml");

    if config_path.exists() && !args.force {
        return Err(CmlError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("init")?;

    println!("✓ Created cml.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cml {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
