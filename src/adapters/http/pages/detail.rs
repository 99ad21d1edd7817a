//! Memorial detail pages.
//!
//! `/m/:slug` is rendered on the server; `/m/:slug/live` ships a shell that
//! fetches `/api/memorials/:slug` in the browser and renders the same view.

use crate::domain::memorial::{Memorial, MemorialProfile};

use super::layout::{html_escape, wrap_page};

/// Render a memorial.
pub fn render_memorial(memorial: &Memorial) -> String {
    let profile = MemorialProfile::from_memorial(memorial);

    let avatar = match &profile.avatar {
        Some(url) => format!(r#"<img src="{}" alt="">"#, html_escape(url)),
        None => "<span>🎮</span>".to_string(),
    };
    let badges: String = profile
        .badges
        .iter()
        .map(|b| format!(r#"<span class="badge">{}</span>"#, html_escape(b)))
        .collect();
    let stamp = match (memorial.published_at, memorial.created_at) {
        (Some(at), _) => format!("Published {}", at.display_date()),
        (None, Some(at)) => format!("Created {}", at.display_date()),
        (None, None) => String::new(),
    };

    let body = format!(
        r#"<div class="memorial">
  <div class="header">
    <div class="avatar">{avatar}</div>
    <div>
      <h1>{gamertag}</h1>
      <div class="meta">Platform: <b>{platform}</b> · Years: <b>{years}</b></div>
      <div>{badges}</div>
    </div>
  </div>
  <blockquote>“{epitaph}”</blockquote>
  <div class="stamp">{stamp}</div>
  <div class="actions">
    <a href="/#graves">← Back to memorials</a>
    <button type="button" onclick="navigator.clipboard.writeText(window.location.href)">Copy Link</button>
  </div>
</div>"#,
        avatar = avatar,
        gamertag = html_escape(&profile.gamertag),
        platform = html_escape(&profile.platform),
        years = html_escape(&profile.years),
        badges = badges,
        epitaph = html_escape(&profile.epitaph),
        stamp = html_escape(&stamp),
    );

    wrap_page(&format!("RIP {}", profile.gamertag), &body)
}

/// Page for an unknown slug.
pub fn render_not_found() -> String {
    wrap_page(
        "Memorial not found",
        r#"<main class="narrow">
  <h1>Memorial not found</h1>
  <p class="muted">Try another link.</p>
  <a href="/">← Back to homepage</a>
</main>"#,
    )
}

/// Client-rendered detail shell.
pub fn render_live_shell(slug: &str) -> String {
    let body = format!(
        r#"<div id="memorial" class="memorial" data-slug="{slug}">Loading…</div>
<script>
{script}
</script>"#,
        slug = html_escape(slug),
        script = LIVE_SCRIPT,
    );
    wrap_page("Memorial", &body)
}

const LIVE_SCRIPT: &str = r#"(function () {
  var root = document.getElementById("memorial");
  var slug = root.getAttribute("data-slug");
  function text(tag, value, cls) {
    var el = document.createElement(tag);
    if (cls) { el.className = cls; }
    el.textContent = value;
    return el;
  }
  function first() {
    for (var i = 0; i < arguments.length; i++) {
      var v = arguments[i];
      if (typeof v === "string" && v.trim() !== "") { return v; }
    }
    return null;
  }
  fetch("/api/memorials/" + encodeURIComponent(slug))
    .then(function (resp) { return resp.ok ? resp.json() : null; })
    .then(function (mem) {
      root.textContent = "";
      if (!mem) { root.textContent = "Memorial not found."; return; }
      var c = mem.content || {};
      var tag = first(c.gamertag, mem.title, mem.name, mem.slug) || "Unknown";
      var platform = first(c.platform, mem.game) || "—";
      var years = first(c.years, c.period, mem.years) || "—";
      var epitaph = first(c.epitaph, c.message) || "Gone but not forgotten.";
      var header = document.createElement("div");
      header.className = "header";
      var avatar = document.createElement("div");
      avatar.className = "avatar";
      if (first(c.avatar)) {
        var img = document.createElement("img");
        img.src = c.avatar;
        img.alt = "";
        avatar.appendChild(img);
      } else {
        avatar.appendChild(text("span", "🎮"));
      }
      header.appendChild(avatar);
      var info = document.createElement("div");
      info.appendChild(text("h1", tag));
      info.appendChild(text("div", "Platform: " + platform + " · Years: " + years, "meta"));
      (Array.isArray(c.badges) ? c.badges : []).forEach(function (b) {
        if (typeof b === "string") { info.appendChild(text("span", b, "badge")); }
      });
      header.appendChild(info);
      root.appendChild(header);
      root.appendChild(text("blockquote", "“" + epitaph + "”"));
      var when = mem.published_at ? "Published " + new Date(mem.published_at).toLocaleString()
        : mem.created_at ? "Created " + new Date(mem.created_at).toLocaleString() : "";
      root.appendChild(text("div", when, "stamp"));
    })
    .catch(function () { root.textContent = "Memorial not found."; });
})();"#;
