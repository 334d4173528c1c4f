use plotters::element::Pie;
use plotters::prelude::*;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{RepoStatsError, Result};
use crate::models::{LanguageDistribution, LanguageShare, RepositoryRecord};

pub const WINDOW_TITLE: &str = "GitHub Repository Analysis";
pub const STARS_TITLE: &str = "Repository stars for users";
pub const LANGUAGES_TITLE: &str = "Language Distribution";

const TERMINAL_BAR_WIDTH: usize = 40;

const PALETTE: [RGBColor; 8] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(158, 157, 36),
];

/// One bar of the star chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarBar {
    pub name: String,
    pub stars: u32,
}

/// What a renderer produced
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Files(Vec<PathBuf>),
    Text(String),
}

/// Read-only presentation of an aggregated collection
pub trait ChartRenderer {
    fn render(
        &self,
        username: &str,
        repositories: &[RepositoryRecord],
        languages: &LanguageDistribution,
    ) -> Result<ChartOutput>;
}

/// Bars keyed by repository name, in collection order
pub fn star_bars(repositories: &[RepositoryRecord]) -> Vec<StarBar> {
    repositories
        .iter()
        .map(|r| StarBar {
            name: r.name.clone(),
            stars: r.stars,
        })
        .collect()
}

pub fn language_slices(languages: &LanguageDistribution) -> Vec<LanguageShare> {
    languages.shares()
}

fn chart_err<E: std::fmt::Display>(err: E) -> RepoStatsError {
    RepoStatsError::ChartFailure(err.to_string())
}

/// Writes `{username}_stars.svg` and `{username}_languages.svg`
pub struct SvgChartRenderer {
    output_dir: PathBuf,
}

impl SvgChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn draw_stars(&self, path: &Path, bars: &[StarBar]) -> Result<()> {
        let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let max_stars = bars.iter().map(|b| b.stars).max().unwrap_or(0);
        let names: Vec<String> = bars.iter().map(|b| b.name.clone()).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(STARS_TITLE, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(80)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (0..bars.len().max(1)).into_segmented(),
                0u32..max_stars.saturating_add(1),
            )
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Repositories")
            .y_desc("Stars")
            .x_labels(bars.len().max(1))
            .x_label_formatter(&|x| match x {
                SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .draw()
            .map_err(chart_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(PALETTE[0].filled())
                    .margin(5)
                    .data(bars.iter().enumerate().map(|(i, b)| (i, b.stars))),
            )
            .map_err(chart_err)?
            .label("Stars")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], PALETTE[0].filled()));

        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }

    fn draw_languages(&self, path: &Path, slices: &[LanguageShare]) -> Result<()> {
        let root = SVGBackend::new(path, (600, 600)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;
        let root = root
            .titled(LANGUAGES_TITLE, ("sans-serif", 24))
            .map_err(chart_err)?;

        let (width, height) = root.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;

        let sizes: Vec<f64> = slices.iter().map(|s| s.count as f64).collect();
        let colors: Vec<RGBColor> = (0..slices.len())
            .map(|i| PALETTE[i % PALETTE.len()])
            .collect();
        let labels: Vec<String> = slices
            .iter()
            .map(|s| format!("{} ({:.2}%)", s.language, s.percentage))
            .collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 14).into_font());
        root.draw(&pie).map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(
        &self,
        username: &str,
        repositories: &[RepositoryRecord],
        languages: &LanguageDistribution,
    ) -> Result<ChartOutput> {
        let stars_path = self.output_dir.join(format!("{}_stars.svg", username));
        let languages_path = self.output_dir.join(format!("{}_languages.svg", username));

        self.draw_stars(&stars_path, &star_bars(repositories))?;
        self.draw_languages(&languages_path, &language_slices(languages))?;

        info!(
            "Charts written to {} and {}",
            stars_path.display(),
            languages_path.display()
        );
        Ok(ChartOutput::Files(vec![stars_path, languages_path]))
    }
}

/// Text bar charts for terminals without a graphical viewer
#[derive(Debug, Default)]
pub struct TerminalChartRenderer;

impl TerminalChartRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn render(
        &self,
        _username: &str,
        repositories: &[RepositoryRecord],
        languages: &LanguageDistribution,
    ) -> Result<ChartOutput> {
        let bars = star_bars(repositories);
        let slices = language_slices(languages);
        let mut out = String::new();

        writeln!(out, "{}", WINDOW_TITLE).map_err(chart_err)?;

        writeln!(out, "\n{}", STARS_TITLE).map_err(chart_err)?;
        let max_stars = bars.iter().map(|b| b.stars as usize).max().unwrap_or(0);
        let name_width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
        for bar in &bars {
            writeln!(
                out,
                "{:<width$} | {} {}",
                bar.name,
                "#".repeat(scaled_width(bar.stars as usize, max_stars)),
                bar.stars,
                width = name_width
            )
            .map_err(chart_err)?;
        }

        writeln!(out, "\n{}", LANGUAGES_TITLE).map_err(chart_err)?;
        let max_count = slices.iter().map(|s| s.count).max().unwrap_or(0);
        let lang_width = slices.iter().map(|s| s.language.chars().count()).max().unwrap_or(0);
        for slice in &slices {
            writeln!(
                out,
                "{:<width$} | {} {} ({:.2}%)",
                slice.language,
                "#".repeat(scaled_width(slice.count, max_count)),
                slice.count,
                slice.percentage,
                width = lang_width
            )
            .map_err(chart_err)?;
        }

        Ok(ChartOutput::Text(out))
    }
}

/// Bar length relative to the largest value; non-zero values get at least one cell
pub fn scaled_width(value: usize, max: usize) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    let cells = (value as f64 / max as f64 * TERMINAL_BAR_WIDTH as f64).round() as usize;
    cells.max(1)
}
