//! Simulation report generation.

use serde::Serialize;

use crate::resources::{ResourceKind, Resources};

/// Everything measured over one simulated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunStats {
    pub ticks: u64,
    pub final_mob_index: u64,
    pub deepest_row: usize,
    pub accessible_depth: usize,
    pub kills: u64,
    pub hero_deaths: u64,
    pub tiles_dug: u64,
    pub dynamite_used: u64,
    pub easter_eggs: u64,
    pub free_upgrades: u64,
    pub purchases: u64,
    pub superpowers: u64,
    pub total_equipment_level: u32,
    pub resources: Resources,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    pub avg_final_mob_index: f64,
    pub avg_deepest_row: f64,
    pub avg_accessible_depth: f64,
    pub avg_kills: f64,
    pub avg_hero_deaths: f64,
    pub avg_tiles_dug: f64,
    pub avg_dynamite_used: f64,
    pub avg_easter_eggs: f64,
    pub avg_free_upgrades: f64,
    pub avg_purchases: f64,
    pub avg_superpowers: f64,
    pub avg_equipment_level: f64,

    /// Average final balance per resource, in display order
    pub avg_resources: Vec<(ResourceKind, f64)>,

    pub max_deepest_row: usize,
    pub max_mob_index: u64,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn average<F>(runs: &[RunStats], f: F) -> f64
where
    F: Fn(&RunStats) -> f64,
{
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let avg_resources = ResourceKind::ALL
            .iter()
            .map(|&kind| (kind, average(&runs, |r| r.resources.get(kind) as f64)))
            .collect();

        Self {
            num_runs: runs.len() as u32,
            avg_final_mob_index: average(&runs, |r| r.final_mob_index as f64),
            avg_deepest_row: average(&runs, |r| r.deepest_row as f64),
            avg_accessible_depth: average(&runs, |r| r.accessible_depth as f64),
            avg_kills: average(&runs, |r| r.kills as f64),
            avg_hero_deaths: average(&runs, |r| r.hero_deaths as f64),
            avg_tiles_dug: average(&runs, |r| r.tiles_dug as f64),
            avg_dynamite_used: average(&runs, |r| r.dynamite_used as f64),
            avg_easter_eggs: average(&runs, |r| r.easter_eggs as f64),
            avg_free_upgrades: average(&runs, |r| r.free_upgrades as f64),
            avg_purchases: average(&runs, |r| r.purchases as f64),
            avg_superpowers: average(&runs, |r| r.superpowers as f64),
            avg_equipment_level: average(&runs, |r| r.total_equipment_level as f64),
            avg_resources,
            max_deepest_row: runs.iter().map(|r| r.deepest_row).max().unwrap_or(0),
            max_mob_index: runs.iter().map(|r| r.final_mob_index).max().unwrap_or(0),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Monster:   {:.1} (best {})\n",
            self.avg_final_mob_index, self.max_mob_index
        ));
        report.push_str(&format!("  Avg Kills:           {:.1}\n", self.avg_kills));
        report.push_str(&format!(
            "  Avg Hero Deaths:     {:.1}\n",
            self.avg_hero_deaths
        ));
        report.push_str(&format!(
            "  Avg Superpowers:     {:.1}\n\n",
            self.avg_superpowers
        ));

        report.push_str("── MINING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Deepest Row:     {:.1} (best {})\n",
            self.avg_deepest_row, self.max_deepest_row
        ));
        report.push_str(&format!(
            "  Avg Accessible:      {:.1}\n",
            self.avg_accessible_depth
        ));
        report.push_str(&format!("  Avg Tiles Dug:       {:.0}\n", self.avg_tiles_dug));
        report.push_str(&format!(
            "  Avg Dynamite Used:   {:.1}\n",
            self.avg_dynamite_used
        ));
        report.push_str(&format!(
            "  Avg Easter Eggs:     {:.2}\n\n",
            self.avg_easter_eggs
        ));

        report.push_str("── EQUIPMENT ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Total Level:     {:.1}\n",
            self.avg_equipment_level
        ));
        report.push_str(&format!("  Avg Purchases:       {:.1}\n", self.avg_purchases));
        report.push_str(&format!(
            "  Avg Free Upgrades:   {:.1}\n\n",
            self.avg_free_upgrades
        ));

        report.push_str("── FINAL RESOURCES ──────────────────────────────────────────────\n");
        for (kind, amount) in &self.avg_resources {
            report.push_str(&format!("  {:<10} {:>12.1}\n", kind.name(), amount));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let deaths_per_kill = if self.avg_kills > 0.0 {
            self.avg_hero_deaths / self.avg_kills
        } else {
            0.0
        };
        let rating = if self.avg_kills == 0.0 {
            "STUCK - No monster was defeated"
        } else if deaths_per_kill < 0.05 {
            "EASY - Hero rarely falls"
        } else if deaths_per_kill < 0.5 {
            "GOOD - Digging keeps pace with monsters"
        } else {
            "HARD - Monsters outscale equipment"
        };
        report.push_str(&format!(
            "  Deaths per Kill: {:.3}\n  Rating:          {}\n",
            deaths_per_kill, rating
        ));

        report
    }

    /// Pretty-printed JSON of the whole report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
