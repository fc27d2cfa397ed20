//! Benchmark progress display with automatic batching for long runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static REPEAT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>2}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos:>4}}/{{len:4}} {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Experiments: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress bars for a benchmark run
///
/// Each experiment gets a bar tracking its repeats. When there are more
/// experiments than visible bars, bars are reused in rotation and an extra
/// batch bar tracks completed experiments.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    repeat_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            repeat_bars: Vec::new(),
        }
    }

    /// Create bars for the given number of experiments
    pub fn initialize(&mut self, experiment_count: usize) {
        if experiment_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(experiment_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..experiment_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(REPEAT_STYLE.clone());
            self.repeat_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of per-experiment bars currently allocated
    pub fn visible_bars(&self) -> usize {
        self.repeat_bars.len()
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        match self.repeat_bars.len() {
            0 => None,
            slots => self.repeat_bars.get(index % slots),
        }
    }

    /// Point a bar at a newly started experiment
    pub fn start_experiment(&self, index: usize, label: &str, repeats: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_length(repeats as u64);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(label.to_string());
        }
    }

    /// Report the number of completed repeats
    pub fn update_repeat(&self, index: usize, repeat: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(repeat as u64);
        }
    }

    /// Mark an experiment as finished
    pub fn complete_experiment(&self, index: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_message("✓");
        }
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All experiments complete");
        }
        let _ = self.multi_progress.clear();
    }
}
