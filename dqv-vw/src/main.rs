//! dqv-vw (Desire-QA Viewer) - Read-only annotation inspection shell
//!
//! Resolves a video identifier against the annotation knowledge base and
//! renders the record's inspection panes. Also lists which on-disk video
//! files carry any annotation. Playback itself belongs to an external
//! media player; this shell only inspects.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dqv_common::config::{self, TomlConfig, ViewerConfig};
use dqv_common::store::AnnotationStore;
use dqv_common::{render, resolver, scan};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "dqv-vw", version, about = "Desire-QA annotation viewer shell")]
struct Cli {
    /// Directory containing {identifier}.mp4 / {identifier}.srt files
    #[arg(long)]
    video_dir: Option<PathBuf>,

    /// Path to the annotation JSON document
    #[arg(long)]
    annotations: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List video files that have any associated annotation
    List,
    /// Print every identifier the annotation store is addressable under
    Ids,
    /// Resolve a video identifier and print its annotation panes
    Show { video_id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config file is read before tracing init so its log level applies
    // when RUST_LOG is unset.
    let file_config = TomlConfig::load_default();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&file_config.logging.level)),
        )
        .init();

    info!(
        "Starting Desire-QA Viewer (dqv-vw) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = config::resolve_viewer_config(cli.video_dir, cli.annotations, &file_config);
    info!("Annotation file: {}", config.annotation_file.display());
    info!("Video directory: {}", config.video_dir.display());

    match cli.command {
        Command::List => list_videos(&config),
        Command::Ids => list_ids(&config),
        Command::Show { video_id } => show(&config, &video_id),
    }
}

fn list_videos(config: &ViewerConfig) -> Result<()> {
    let store = AnnotationStore::load_or_empty(&config.annotation_file);
    let known = resolver::known_ids(&store);
    for file in scan::annotated_video_files(&config.video_dir, &known)? {
        println!("{file}");
    }
    Ok(())
}

fn list_ids(config: &ViewerConfig) -> Result<()> {
    let store = AnnotationStore::load_or_empty(&config.annotation_file);
    for id in resolver::known_ids(&store) {
        println!("{id}");
    }
    Ok(())
}

fn show(config: &ViewerConfig, video_id: &str) -> Result<()> {
    check_media_assets(config, video_id);

    // The store is re-read on every lookup; nothing is cached across shows.
    let store = AnnotationStore::load_or_empty(&config.annotation_file);
    let Some(record) = resolver::resolve(video_id, &store) else {
        println!("{}", render::NO_ANNOTATION);
        return Ok(());
    };

    print_pane("Basic info", &render::basic_info(video_id, record));
    print_pane("Desire analysis", &render::desire_analysis(record));
    print_pane("Questions", &render::questions(record));
    print_pane("Timeline", &render::timeline(video_id, record));
    Ok(())
}

/// Missing media is surfaced, never fatal: the annotation still prints.
fn check_media_assets(config: &ViewerConfig, video_id: &str) {
    let video = config.video_dir.join(format!("{video_id}.mp4"));
    if !video.exists() {
        error!("video file missing: {}", video.display());
    }
    let subtitles = config.video_dir.join(format!("{video_id}.srt"));
    if !subtitles.exists() {
        warn!("subtitle file missing: {}", subtitles.display());
    }
}

fn print_pane(title: &str, body: &str) {
    println!("=== {title} ===");
    println!("{}", body.trim_end());
    println!();
}
