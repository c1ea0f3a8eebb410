//! Progress reporting while a summary loads

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use summary_application::SummaryObserver;
use summary_domain::{SummaryResource, SummaryState};

/// Spinner shown on stderr while a cycle is loading
pub struct LoadingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl LoadingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn resource_display_name(resource: SummaryResource) -> &'static str {
        match resource {
            SummaryResource::Clarifiers => "clarifier responses",
            SummaryResource::Conflicts => "conflicts",
        }
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryObserver for LoadingSpinner {
    fn on_state_change(&self, state: &SummaryState) {
        let mut bar = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        match state {
            SummaryState::Loading => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message("Loading summary...");
                pb.enable_steady_tick(Duration::from_millis(100));
                if let Some(previous) = bar.replace(pb) {
                    previous.finish_and_clear();
                }
            }
            _ => {
                if let Some(pb) = bar.take() {
                    pb.finish_and_clear();
                }
            }
        }
    }

    fn on_fetch_start(&self, resource: SummaryResource) {
        let bar = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pb) = bar.as_ref() {
            pb.set_message(format!(
                "Fetching {}...",
                Self::resource_display_name(resource)
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI), for non-terminal stderr
pub struct SimpleProgress;

impl SummaryObserver for SimpleProgress {
    fn on_state_change(&self, state: &SummaryState) {
        match state {
            SummaryState::Loading => eprintln!("{} {}", "->".cyan(), "Loading summary".bold()),
            SummaryState::Loaded(_) => eprintln!("  {} summary loaded", "v".green()),
            SummaryState::Failed(_) => eprintln!("  {} summary failed", "x".red()),
            SummaryState::Idle => {}
        }
    }

    fn on_fetch_complete(&self, resource: SummaryResource, success: bool) {
        let name = LoadingSpinner::resource_display_name(resource);
        if success {
            eprintln!("  {} {}", "v".green(), name);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), name);
        }
    }
}
