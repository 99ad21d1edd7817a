//! Shared page shell and escaping.

/// Site name shown in titles and footers.
pub const SITE_NAME: &str = "RIPGAMERTAGS";

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap a page body in the document shell.
pub fn wrap_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
        css = BASE_CSS,
        body = body
    )
}

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }

body {
    margin: 0;
    min-height: 100vh;
    background: #07070a;
    color: #f4f4f5;
    font-family: Inter, system-ui, -apple-system, 'Segoe UI', Arial, sans-serif;
}

a { color: inherit; }

.container { max-width: 1152px; margin: 0 auto; padding: 0 16px; }
.narrow { max-width: 672px; margin: 0 auto; padding: 64px 16px; }
.muted { color: #a1a1aa; }

.hero {
    margin-top: 96px;
    padding: 24px;
    border: 1px solid rgba(39, 39, 42, 0.6);
    border-radius: 24px;
    background: linear-gradient(135deg, rgba(217, 70, 239, 0.1), rgba(139, 92, 246, 0.08), rgba(34, 211, 238, 0.1));
}
.hero h1 { font-size: 48px; line-height: 1.1; margin: 12px 0; letter-spacing: -0.02em; }
.pill {
    display: inline-block;
    padding: 4px 12px;
    border: 1px solid #27272a;
    border-radius: 999px;
    background: rgba(24, 24, 27, 0.7);
    font-size: 12px;
    color: #d4d4d8;
}

.button {
    display: inline-block;
    padding: 12px 20px;
    border-radius: 16px;
    font-size: 14px;
    font-weight: 600;
    text-decoration: none;
    border: 1px solid #27272a;
}
.button.primary { border: 0; background: linear-gradient(90deg, #d946ef, #8b5cf6, #22d3ee); }

.stats { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 16px; margin-top: 32px; }
.stat { padding: 12px 16px; border: 1px solid rgba(39, 39, 42, 0.8); border-radius: 16px; background: rgba(9, 9, 11, 0.6); }
.stat .label { font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; color: #a1a1aa; }
.stat .value { font-size: 18px; font-weight: 600; }

.graves { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 24px; padding-bottom: 96px; }
.tombstone { border: 1px solid #27272a; border-radius: 16px; background: rgba(9, 9, 11, 0.6); overflow: hidden; }
.tombstone .banner { height: 96px; }
.tombstone .body { padding: 16px; font-size: 14px; }
.tombstone dl { margin: 0; }
.tombstone dt { float: left; width: 96px; color: #a1a1aa; }
.tombstone dd { margin: 0 0 4px 96px; }
.tombstone .epitaph { font-style: italic; font-size: 12px; color: #a1a1aa; }
.tombstone .symbols { font-size: 18px; }

.empty { padding: 24px; border: 1px solid #27272a; border-radius: 16px; color: #a1a1aa; }

.field { display: block; margin-bottom: 12px; }
.field span { display: block; margin-bottom: 4px; font-size: 14px; color: #a1a1aa; }
.field input {
    width: 100%;
    padding: 8px 12px;
    border: 1px solid #27272a;
    border-radius: 12px;
    background: rgba(24, 24, 27, 0.8);
    color: #f4f4f5;
}
.panel { margin-top: 24px; padding: 16px; border: 1px solid #27272a; border-radius: 16px; background: rgba(9, 9, 11, 0.6); }

.memorial {
    max-width: 880px;
    margin: 40px auto;
    padding: 24px;
    border: 1px solid #1a2233;
    border-radius: 16px;
    background: linear-gradient(180deg, #0b0f17 0%, #0f1522 100%);
    color: #e9eef7;
}
.memorial .header { display: flex; gap: 20px; align-items: center; }
.memorial .avatar {
    width: 88px; height: 88px; border-radius: 50%;
    display: grid; place-items: center; overflow: hidden;
    background: #141b2b; border: 1px solid #24324c; font-size: 28px;
}
.memorial .avatar img { width: 100%; height: 100%; object-fit: cover; }
.memorial h1 { margin: 0; font-size: 32px; line-height: 1.15; }
.memorial .meta { margin-top: 6px; color: #9fb0d6; font-size: 14px; }
.memorial .meta b { color: #d7e2ff; }
.memorial .badge { display: inline-block; margin: 8px 8px 0 0; padding: 4px 8px; border: 1px solid #24324c; border-radius: 999px; color: #9fb0d6; }
.memorial blockquote { margin: 20px 0 0; padding-top: 16px; border-top: 1px solid #1a2233; font-size: 18px; line-height: 1.7; color: #cdd8f3; }
.memorial .stamp { margin-top: 14px; font-size: 12px; color: #8ea0c9; }
.memorial .actions { margin-top: 18px; display: flex; gap: 10px; }
.memorial button { border: 1px solid #24324c; background: #0f1522; color: #e9eef7; border-radius: 10px; padding: 6px 10px; cursor: pointer; }

footer { border-top: 1px solid rgba(24, 24, 27, 0.7); padding: 40px 0; font-size: 14px; color: #a1a1aa; }
"#;
