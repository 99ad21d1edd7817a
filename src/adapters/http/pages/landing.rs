//! Landing page: hero, stats and the most recent burials.

use crate::domain::memorial::{Memorial, MemorialProfile};

use super::layout::{html_escape, wrap_page, SITE_NAME};

const DEFAULT_SYMBOLS: [&str; 3] = ["🕯️", "🎮", "💀"];
const DEFAULT_ACCENT: &str = "#7c3aed";

/// One grave card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tombstone {
    pub name: String,
    pub game: String,
    pub years: String,
    pub epitaph: Option<String>,
    pub symbols: Vec<String>,
    pub accent_color: String,
    /// Detail page link, when the memorial has a slug.
    pub href: Option<String>,
}

impl Tombstone {
    pub fn from_memorial(memorial: &Memorial) -> Self {
        let profile = MemorialProfile::from_memorial(memorial);
        let symbols = memorial
            .content
            .as_ref()
            .and_then(|c| c.get("symbols"))
            .and_then(|s| s.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|s| s.as_str())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|s| !s.is_empty())
            .unwrap_or_else(default_symbols);

        Self {
            name: profile.gamertag,
            game: profile.platform,
            years: profile.years,
            epitaph: Some(profile.epitaph),
            symbols,
            accent_color: memorial
                .content_str("accent_color")
                .unwrap_or(DEFAULT_ACCENT)
                .to_string(),
            href: memorial
                .slug
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| format!("/m/{}", s)),
        }
    }

    fn render(&self) -> String {
        let name = match &self.href {
            Some(href) => format!(
                r#"<a href="{}">{}</a>"#,
                html_escape(href),
                html_escape(&self.name)
            ),
            None => html_escape(&self.name),
        };
        let epitaph = self
            .epitaph
            .as_deref()
            .map(|e| format!(r#"<p class="epitaph">“{}”</p>"#, html_escape(e)))
            .unwrap_or_default();
        let symbols: String = self
            .symbols
            .iter()
            .map(|s| format!("<span>{}</span>", html_escape(s)))
            .collect();

        format!(
            r#"<article class="tombstone">
  <div class="banner" style="background: radial-gradient(circle at 50% 0%, {accent}55, transparent)"></div>
  <div class="body">
    <dl>
      <dt>Char name:</dt><dd><strong>{name}</strong></dd>
      <dt>Game:</dt><dd>{game}</dd>
      <dt>Years:</dt><dd>{years}</dd>
    </dl>
    {epitaph}
    <div class="symbols">{symbols}</div>
  </div>
</article>"#,
            accent = html_escape(&self.accent_color),
            name = name,
            game = html_escape(&self.game),
            years = html_escape(&self.years),
            epitaph = epitaph,
            symbols = symbols,
        )
    }
}

fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Graves shown while the datastore has none to offer.
pub fn sample_graves() -> Vec<Tombstone> {
    let grave = |name: &str, game: &str, years: &str, epitaph: &str, symbols: &[&str], accent: &str| {
        Tombstone {
            name: name.to_string(),
            game: game.to_string(),
            years: years.to_string(),
            epitaph: Some(epitaph.to_string()),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            accent_color: accent.to_string(),
            href: None,
        }
    };

    vec![
        grave("ShadowReaper", "Valorant", "2016–2025", "Top frag no more — GG", &DEFAULT_SYMBOLS, "#7c3aed"),
        grave("NoScopeNinja", "CS2", "2012–2024", "Dust2 forever", &["🕯️", "🎯"], "#22d3ee"),
        grave("LlamaLord", "Fortnite", "2018–", "Victory royale… eventually", &["🕯️", "🪦"], "#a78bfa"),
    ]
}

/// Counts of 1000 and above are shown in thousands with one decimal.
pub fn format_count(n: u64) -> String {
    if n >= 1000 {
        let thousands = (n as f64 / 100.0).round() / 10.0;
        format!("{}k", thousands)
    } else {
        n.to_string()
    }
}

/// Render the landing page.
pub fn render_landing(graves: &[Tombstone]) -> String {
    let stat = |label: &str, value: &str| {
        format!(
            r#"<div class="stat"><div class="label">{}</div><div class="value">{}</div></div>"#,
            label, value
        )
    };
    let stats = [
        stat("Burials", &format_count(graves.len() as u64)),
        stat("Games", "742"),
        stat("Candles lit", "98k"),
        stat("Clips saved", "31k"),
    ]
    .concat();

    let listing = if graves.is_empty() {
        r#"<div class="empty">No graves yet. Be the first to <a href="/pay">bury your character</a>.</div>"#
            .to_string()
    } else {
        let cards: String = graves.iter().map(Tombstone::render).collect();
        format!(r#"<div class="graves">{}</div>"#, cards)
    };

    let body = format!(
        r##"<main>
<section class="container">
  <div class="hero">
    <span class="pill">Now open for legends &amp; fallen tags</span>
    <h1>The world’s largest online gamer cemetery</h1>
    <p>Best &amp; biggest gamer cemetery — building a vault of <strong>1,000,000</strong> burials.</p>
    <p>Join us, claim your plot, and let your tag haunt the leaderboard forever.</p>
    <p>
      <a class="button primary" href="/pay" title="Go to payment &amp; add your info">Bury your character</a>
      <a class="button" href="#graves">Browse the graves</a>
    </p>
    <div class="stats">{stats}</div>
  </div>
</section>
<section id="graves" class="container">
  <h2>Fresh burials</h2>
  {listing}
</section>
<footer>
  <div class="container">
    <p>Respectful by design — no real grave imagery, no religious symbols. Just gamer lore.</p>
    <p>© {year} {site}</p>
  </div>
</footer>
</main>"##,
        stats = stats,
        listing = listing,
        year = chrono::Utc::now().format("%Y"),
        site = SITE_NAME,
    );

    wrap_page(&format!("{} · Gamer cemetery", SITE_NAME), &body)
}
