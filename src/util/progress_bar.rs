
use indicatif::{ProgressState, ProgressStyle};

/// Template shared by every progress bar we render
const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({percent}); ETA: {eta_precise}; Speed: {per_sec} {msg}";

/// Shared function to pull our progress bar styling.
/// Falls back to the indicatif default bar if the template is rejected.
pub fn get_progress_style() -> ProgressStyle {
    match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        Ok(style) => style
            .with_key("percent", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}%", state.fraction() * 100.0);
            })
            .with_key("per_sec", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.0} pairs/s", state.per_sec());
            })
            .progress_chars("##-"),
        Err(_) => ProgressStyle::default_bar()
    }
}
