//! Animated console presentation
//!
//! The animated renderer and the static `ConsoleFormatter` share the same
//! projection (`MatchReport`); this module only adds pacing. All animations
//! are cosmetic and skippable via `--no-animate` or the config toggle.

use crate::config::AnimationConfig;
use crate::output::formatter::ConsoleFormatter;
use crate::output::report::{MatchReport, NO_MISSING_SKILLS_MESSAGE};
use colored::{Color, Colorize};
use std::io::{self, Write};
use std::time::Duration;

/// Frame count for the score count-up
const SCORE_FRAMES: u32 = 48;

/// Particle burst dimensions
const CONFETTI_PARTICLES: usize = 150;
const CONFETTI_SPREAD: usize = 70;
const CONFETTI_ROWS: usize = 8;

const CONFETTI_GLYPHS: [char; 6] = ['*', '•', '✦', '○', '+', '.'];
const CONFETTI_COLORS: [Color; 5] = [
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::BrightRed,
];

/// Ease-out cubic progress for frame `frame` of `total`.
pub fn eased_progress(frame: u32, total: u32) -> f32 {
    if total == 0 {
        return 1.0;
    }
    let t = (frame as f32 / total as f32).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Deterministic particle scatter. Positions stay within the given bounds.
pub fn scatter_particles(count: usize, cols: usize, rows: usize) -> Vec<(usize, usize, char)> {
    // Small LCG keeps the scatter deterministic.
    let mut state: u64 = 0x5DEECE66D;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|i| {
            let row = next() % rows;
            let col = next() % cols;
            let glyph = CONFETTI_GLYPHS[i % CONFETTI_GLYPHS.len()];
            (row, col, glyph)
        })
        .collect()
}

/// One-shot celebratory particle burst. Best-effort: write errors are ignored.
pub fn confetti_burst(use_colors: bool) {
    let particles = scatter_particles(CONFETTI_PARTICLES, CONFETTI_SPREAD, CONFETTI_ROWS);

    let mut grid = vec![vec![' '; CONFETTI_SPREAD]; CONFETTI_ROWS];
    for (row, col, glyph) in &particles {
        grid[*row][*col] = *glyph;
    }

    let mut out = String::new();
    out.push('\n');
    for (r, row) in grid.iter().enumerate() {
        for (c, glyph) in row.iter().enumerate() {
            if *glyph == ' ' {
                out.push(' ');
            } else if use_colors {
                let color = CONFETTI_COLORS[(r + c) % CONFETTI_COLORS.len()];
                let glyph = glyph.to_string();
                out.push_str(&glyph.as_str().color(color).to_string());
            } else {
                out.push(*glyph);
            }
        }
        out.push('\n');
    }
    out.push_str(&center_line("🎉 Great match! 🎉", CONFETTI_SPREAD));
    out.push('\n');

    let _ = io::stdout().write_all(out.as_bytes());
    let _ = io::stdout().flush();
}

fn center_line(text: &str, width: usize) -> String {
    let visible = text.chars().count();
    let pad = width.saturating_sub(visible) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

pub struct AnimatedRenderer {
    formatter: ConsoleFormatter,
    use_colors: bool,
    animation: AnimationConfig,
}

impl AnimatedRenderer {
    pub fn new(use_colors: bool, animation: AnimationConfig) -> Self {
        Self {
            formatter: ConsoleFormatter::new(use_colors),
            use_colors,
            animation,
        }
    }

    /// Render the full results section with pacing.
    pub async fn render(&self, report: &MatchReport) {
        print!("{}", self.formatter.format_header("📊 Analysis Results", 1));

        self.animate_score(report.score_percentage()).await;

        print!("{}", self.formatter.format_header("⚠️  Missing Skills", 2));
        if report.missing_skills.is_empty() {
            println!("{}", self.colorize(NO_MISSING_SKILLS_MESSAGE, Color::Green));
        } else {
            for skill in &report.missing_skills {
                println!("  • {}", self.colorize(skill, Color::Red));
            }
        }

        print!("{}", self.formatter.format_header("✅ Matched Skills", 2));
        if report.common_skills.is_empty() {
            println!("  (none)");
        } else {
            for skill in &report.common_skills {
                println!("  • {}", self.colorize(skill, Color::Green));
            }
        }

        print!(
            "{}",
            self.formatter
                .format_header("✨ AI Recommended Bullet Points", 2)
        );
        for (i, bullet) in report.suggested_bullets.iter().enumerate() {
            tokio::time::sleep(Duration::from_millis(self.animation.bullet_stagger_ms)).await;
            print!("  {}. ", i + 1);
            let _ = io::stdout().flush();
            self.type_out(bullet).await;
            println!();
        }

        print!(
            "{}",
            self.formatter
                .format_header("💌 Start Your Cover Letter Like This", 2)
        );
        println!(
            "\"{}\"",
            self.colorize(report.cover_letter_display(), Color::Cyan)
        );
    }

    /// Count the score up from 0 with an ease-out curve, redrawing in place.
    async fn animate_score(&self, target: u8) {
        let frame_delay =
            Duration::from_millis(self.animation.score_duration_ms / u64::from(SCORE_FRAMES));

        print!("{}", self.formatter.format_header("Match Score", 2));
        for frame in 0..=SCORE_FRAMES {
            let value = (f32::from(target) * eased_progress(frame, SCORE_FRAMES)).round() as u8;
            print!("\r{:>3}%", value);
            let _ = io::stdout().flush();
            tokio::time::sleep(frame_delay).await;
        }
        println!(" {}", self.formatter.format_score_badge(target));
    }

    /// Letter-by-letter reveal at the configured fixed rate.
    async fn type_out(&self, text: &str) {
        let interval = Duration::from_millis(self.animation.typing_interval_ms);
        for ch in text.chars() {
            print!("{}", ch);
            let _ = io::stdout().flush();
            tokio::time::sleep(interval).await;
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
