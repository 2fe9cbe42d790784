//! Command-line front end over `folio_core`.
//!
//! # Responsibility
//! - Print the listing, detail and filter projections the site pages use.
//! - Keep output deterministic so content changes can be diffed.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    all_roles, all_types, date_range_label, filter_with_outcome, init_logging,
    init_stderr_logging, render_body_html, ContentConfig, FsProjectRepository, Project,
    ProjectCard, ProjectFilter, ProjectService, ProjectType, Role,
};
use log::debug;
use serde::Serialize;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio", about = "Inspect portfolio project content")]
struct Cli {
    /// Directory holding `*.md` / `*.mdx` project files
    #[arg(long = "content-dir", global = true)]
    content_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long = "log-level", global = true, default_value = "warn")]
    log_level: String,

    /// Absolute directory for rotating log files; stderr when omitted
    #[arg(long = "log-dir", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List projects in display order
    List {
        /// Only featured projects
        #[arg(long)]
        featured: bool,
        #[arg(long)]
        json: bool,
    },
    /// Show one project
    Show {
        slug: String,
        /// Print the rendered body HTML instead of the summary
        #[arg(long)]
        html: bool,
        #[arg(long)]
        json: bool,
    },
    /// Filter the listing
    Filter(FilterArgs),
    /// Print the tag vocabulary
    Tags,
    /// Print the project types
    Types,
    /// Print the roles
    Roles,
    /// Print the core version
    Version,
}

#[derive(Debug, Parser)]
struct FilterArgs {
    /// Case-insensitive text over title, description, tags and stack
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long = "type", value_parser = parse_type)]
    kind: Option<ProjectType>,
    #[arg(long, value_parser = parse_role)]
    role: Option<Role>,
    /// Required tag; repeat for several
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct FilterReport {
    shown: usize,
    total: usize,
    projects: Vec<ProjectCard>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logging = match cli.log_dir.as_deref() {
        Some(dir) => init_logging(&cli.log_level, dir),
        None => init_stderr_logging(&cli.log_level),
    };
    logging
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    let config = ContentConfig::resolve(cli.content_dir.as_deref());
    debug!(
        "event=cli_start module=cli status=ok content_dir={}",
        config.content_dir.display()
    );
    let service = ProjectService::new(FsProjectRepository::new(&config.content_dir));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(cli.cmd, &service, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(
    cmd: Command,
    service: &ProjectService<FsProjectRepository>,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        Command::List { featured, json } => {
            let projects = if featured {
                service.featured_projects()
            } else {
                service.all_projects()
            }
            .context("failed to list projects")?;
            if json {
                let cards: Vec<_> = projects.iter().map(ProjectCard::from_project).collect();
                serde_json::to_writer_pretty(&mut *out, &cards)?;
                writeln!(out)?;
            } else {
                for project in &projects {
                    write_row(out, project)?;
                }
            }
        }
        Command::Show { slug, html, json } => {
            let project = service.get_project(&slug)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &project)?;
                writeln!(out)?;
            } else if html {
                writeln!(out, "{}", render_body_html(&project.content))?;
            } else {
                write_detail(out, &project)?;
            }
        }
        Command::Filter(args) => {
            let projects = service.all_projects().context("failed to list projects")?;
            let filter = ProjectFilter {
                search: args.search,
                kind: args.kind,
                role: args.role,
                tags: args.tags,
            };
            let (shown, outcome) = filter_with_outcome(&projects, &filter);
            if args.json {
                let report = FilterReport {
                    shown: outcome.shown,
                    total: outcome.total,
                    projects: shown.into_iter().map(ProjectCard::from_project).collect(),
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", outcome.summary())?;
                for project in shown {
                    write_row(out, project)?;
                }
            }
        }
        Command::Tags => {
            for tag in service.all_tags().context("failed to collect tags")? {
                writeln!(out, "{tag}")?;
            }
        }
        Command::Types => {
            for kind in all_types() {
                writeln!(out, "{}\t{}", kind, kind.label())?;
            }
        }
        Command::Roles => {
            for role in all_roles() {
                writeln!(out, "{}\t{}", role, role.label())?;
            }
        }
        Command::Version => {
            writeln!(out, "folio_core version={}", folio_core::core_version())?;
        }
    }
    Ok(())
}

fn write_row(out: &mut impl Write, project: &Project) -> io::Result<()> {
    let meta = &project.meta;
    writeln!(
        out,
        "{}{}\t{}\t{}\t{}",
        if meta.featured { "* " } else { "  " },
        meta.slug,
        meta.kind.label(),
        meta.status,
        date_range_label(&meta.dates)
    )
}

fn write_detail(out: &mut impl Write, project: &Project) -> io::Result<()> {
    let meta = &project.meta;
    writeln!(out, "{}", meta.title)?;
    writeln!(out, "{}", meta.description)?;
    writeln!(
        out,
        "{} | {} | {}",
        meta.status,
        meta.kind.label(),
        meta.roles
            .iter()
            .map(|role| role.label())
            .collect::<Vec<_>>()
            .join(", ")
    )?;
    writeln!(out, "{}", date_range_label(&meta.dates))?;
    if !meta.stack.is_empty() {
        writeln!(out, "stack: {}", meta.stack.join(", "))?;
    }
    if !meta.tags.is_empty() {
        writeln!(out, "tags: {}", meta.tags.join(", "))?;
    }
    for highlight in &meta.highlights {
        writeln!(out, "- {highlight}")?;
    }
    if let Some(metrics) = meta.metrics.as_ref().filter(|metrics| !metrics.is_empty()) {
        if let Some(users) = &metrics.users {
            writeln!(out, "users: {users}")?;
        }
        if let Some(latency) = &metrics.latency {
            writeln!(out, "latency: {latency}")?;
        }
        if let Some(accuracy) = &metrics.accuracy {
            writeln!(out, "accuracy: {accuracy}")?;
        }
        if let Some(revenue) = &metrics.revenue {
            writeln!(out, "revenue: {revenue}")?;
        }
    }
    for (label, link) in [
        ("source", &meta.links.github),
        ("live", &meta.links.live),
        ("paper", &meta.links.paper),
        ("video", &meta.links.video),
    ] {
        if let Some(url) = link {
            writeln!(out, "{label}: {url}")?;
        }
    }
    Ok(())
}

fn parse_type(value: &str) -> Result<ProjectType, String> {
    ProjectType::parse(value).ok_or_else(|| format!("unknown project type `{value}`"))
}

fn parse_role(value: &str) -> Result<Role, String> {
    Role::parse(value).ok_or_else(|| format!("unknown role `{value}`"))
}
