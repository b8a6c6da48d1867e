//! CLI tool for downloading a YouTube video and transcribing it with vlmrun.
//!
//! Thin orchestration around two external collaborators: `yt-dlp` downloads
//! the video, `vlmrun` produces the transcript. Both are invoked as
//! subprocesses; their correctness is out of scope here.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const TRANSCRIBE_PROMPT: &str = "Transcribe this video with timestamps for each section. \
     Output the full transcript in a clear, readable format.";

/// Download a YouTube video and transcribe it with vlmrun.
#[derive(Parser, Debug)]
#[command(name = "yt-transcribe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YouTube video URL (e.g. https://www.youtube.com/watch?v=VIDEO_ID)
    url: String,

    /// Output directory for the downloaded video and transcript
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Let vlmrun stream output (default: no-stream, for capturing the transcript)
    #[arg(long)]
    stream: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    // Pick up VLMRUN_API_KEY and friends from a project-level .env file.
    dotenvy::dotenv().ok();
    if std::env::var_os("VLMRUN_API_KEY").is_none() {
        log::warn!("VLMRUN_API_KEY not set. Set it in .env or your environment.");
    }

    let output_dir = &args.output;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    eprintln!("Output directory: {}", output_dir.display());

    eprintln!("Downloading video...");
    let video_path = download_video(&args.url, output_dir)?;
    eprintln!("Downloaded: {}", video_path.display());

    eprintln!("Transcribing with vlmrun...");
    let transcript = run_transcription(&video_path, output_dir, !args.stream)?;

    let transcript_path = output_dir.join("transcript.txt");
    fs::write(&transcript_path, transcript)
        .with_context(|| format!("Failed to write {}", transcript_path.display()))?;
    eprintln!("Transcript saved to: {}", transcript_path.display());

    Ok(())
}

/// Download the video as `<output_dir>/video.<ext>` and return its path.
/// The extension depends on what yt-dlp could fetch and merge.
fn download_video(url: &str, output_dir: &Path) -> Result<PathBuf> {
    let template = output_dir.join("video.%(ext)s");

    let status = Command::new("yt-dlp")
        .args(["-f", "best[ext=mp4]/best", "--merge-output-format", "mp4", "-o"])
        .arg(&template)
        .arg(url)
        .status()
        .context("Failed to run yt-dlp. Is it installed and on PATH?")?;
    if !status.success() {
        bail!("yt-dlp exited with status {status}");
    }

    find_downloaded_video(output_dir)?
        .with_context(|| format!("No downloaded file found in {}", output_dir.display()))
}

/// Locate the `video.*` file yt-dlp produced.
fn find_downloaded_video(output_dir: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(output_dir)
        .with_context(|| format!("Failed to read {}", output_dir.display()))?
    {
        let path = entry?.path();
        let is_video = path.is_file()
            && path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem == "video");
        if is_video {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Run vlmrun over the downloaded video and capture the transcript from its
/// stdout.
fn run_transcription(video_path: &Path, output_dir: &Path, no_stream: bool) -> Result<String> {
    let mut cmd = Command::new("vlmrun");
    cmd.args(["chat", TRANSCRIBE_PROMPT, "-i"])
        .arg(video_path)
        .arg("-o")
        .arg(output_dir);
    if no_stream {
        cmd.arg("--no-stream");
    }

    let output = cmd
        .output()
        .context("Failed to run vlmrun. Is it installed and on PATH?")?;
    if !output.status.success() {
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        bail!("vlmrun exited with status {}", output.status);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_downloaded_video_picks_video_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("video.mkv"), b"x").unwrap();
        fs::write(dir.path().join("transcript.txt"), b"x").unwrap();

        let found = find_downloaded_video(dir.path()).unwrap().unwrap();
        assert_eq!(found, dir.path().join("video.mkv"));
    }

    #[test]
    fn test_find_downloaded_video_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_downloaded_video(dir.path()).unwrap(), None);
    }

    #[test]
    fn test_find_downloaded_video_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("video.frames")).unwrap();

        assert_eq!(find_downloaded_video(dir.path()).unwrap(), None);
    }
}
