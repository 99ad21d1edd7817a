//! Payment page: burial form plus the PayPal button.
//!
//! The browser asks `/api/checkout/start` for an order, captures it with the
//! SDK, then posts the form with the approved order id to `/api/after-pay`.

use super::layout::{html_escape, wrap_page};

const SDK_URL: &str = "https://www.paypal.com/sdk/js";

pub const MISSING_CLIENT_ID: &str = "Missing PayPal client id";

/// Render the payment page. Without a client id the button is not loaded.
pub fn render_payment_page(client_id: Option<&str>) -> String {
    let client_id = client_id.map(str::trim).filter(|id| !id.is_empty());
    let sdk_src = client_id
        .map(|id| format!("{}?client-id={}&currency=USD&intent=capture", SDK_URL, id))
        .unwrap_or_default();
    let initial_status = match client_id {
        Some(_) => "Fill details then click Pay",
        None => MISSING_CLIENT_ID,
    };

    let body = format!(
        r#"<main class="narrow">
  <a class="muted" href="/">← Back to homepage</a>
  <h1>Bury your character</h1>
  <p>Pay <strong>$1</strong> to publish.</p>

  <form id="burial" onsubmit="return false">
    <label class="field"><span>Char name</span><input name="name" placeholder="Char name"></label>
    <label class="field"><span>Game</span><input name="game" placeholder="Game"></label>
    <label class="field"><span>Years</span><input name="years" placeholder="Years"></label>
  </form>

  <div class="panel">
    <div id="paypal-buttons" data-sdk-src="{sdk_src}"></div>
    <p id="status" class="muted">{status}</p>
  </div>
</main>
<script>
{script}
</script>"#,
        sdk_src = html_escape(&sdk_src),
        status = html_escape(initial_status),
        script = PAYMENT_SCRIPT,
    );

    wrap_page("Bury your character", &body)
}

const PAYMENT_SCRIPT: &str = r#"(function () {
  var container = document.getElementById("paypal-buttons");
  var statusEl = document.getElementById("status");
  var src = container.getAttribute("data-sdk-src");
  function setStatus(text) { statusEl.textContent = text; }
  function formValues() {
    var form = document.getElementById("burial");
    return {
      name: form.elements.name.value,
      game: form.elements.game.value,
      years: form.elements.years.value
    };
  }
  if (!src) { return; }

  var script = document.createElement("script");
  script.src = src;
  script.async = true;
  script.onload = function () {
    if (!window.paypal) { setStatus("PayPal SDK failed to load"); return; }
    window.paypal.Buttons({
      style: { shape: "pill", layout: "vertical", label: "pay", tagline: false },
      createOrder: async function () {
        setStatus("Creating order…");
        var resp = await fetch("/api/checkout/start", {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify({ amount: "1.00", currency: "USD" })
        });
        var text = await resp.text();
        if (!resp.ok) {
          setStatus("Server error from /api/checkout/start: " + text);
          throw new Error(text);
        }
        var json = JSON.parse(text);
        if (!json.id) { setStatus("No order id in response"); throw new Error("No id"); }
        setStatus("Order created. Awaiting approval…");
        return json.id;
      },
      onApprove: async function (data, actions) {
        try {
          setStatus("Capturing payment…");
          if (actions.order) { await actions.order.capture(); }
          var payload = formValues();
          payload.orderId = data.orderID;
          var resp = await fetch("/api/after-pay", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify(payload)
          });
          var json = await resp.json();
          if (!resp.ok) { setStatus("Publish failed: " + (json.error || resp.status)); return; }
          setStatus("✅ Payment captured! Your grave is live.");
          window.location.href = "/m/" + encodeURIComponent(data.orderID);
        } catch (e) {
          console.error(e);
          setStatus("Capture error — check console");
        }
      },
      onError: function (err) {
        console.error(err);
        setStatus("PayPal error — check console");
      }
    }).render(container);
  };
  document.body.appendChild(script);
})();"#;
