//! The single HTML page served at `/`.
//!
//! The page is a thin shell: it fetches the layout, opens a session and
//! draws whatever figures the server sends back with Plotly.

use crate::constants::{DASHBOARD_HEADING, PLOTLY_CDN_URL};

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
<script src="{{plotly}}"></script>
<style>
  body { font-family: sans-serif; margin: 1.5em; }
  select { margin-bottom: 0.75em; padding: 0.25em; }
  .graph { min-height: 450px; }
</style>
</head>
<body>
<div id="root"></div>
<script>
(function () {
  const root = document.getElementById("root");
  let session = null;

  function barTrace(fig) {
    if (fig.aggregation === "none") {
      const x = [], y = [];
      for (const bar of fig.bars) {
        for (const v of bar.segments) { x.push(bar.label); y.push(v); }
      }
      return { data: [{ type: "bar", x: x, y: y }], barmode: "relative" };
    }
    return {
      data: [{ type: "bar", x: fig.bars.map(b => b.label), y: fig.bars.map(b => b.value) }],
      barmode: "group",
    };
  }

  function draw(id, fig) {
    const el = document.getElementById(id);
    if (!el) return;
    if (!fig) { Plotly.purge(el); return; }
    if (fig.type === "bar") {
      const t = barTrace(fig);
      Plotly.react(el, t.data, {
        title: { text: fig.title },
        barmode: t.barmode,
        xaxis: { title: { text: fig.x } },
        yaxis: { title: { text: fig.y } },
      });
    } else if (fig.type === "choropleth") {
      const trace = {
        type: "choropleth",
        locations: fig.areas.map(a => a.location),
        z: fig.areas.map(a => a.value),
        locationmode: fig.location_mode,
        colorscale: fig.color_scale,
        colorbar: { title: { text: fig.color } },
      };
      if (fig.range) { trace.zmin = fig.range.min; trace.zmax = fig.range.max; }
      Plotly.react(el, [trace], { title: { text: fig.title }, geo: { scope: fig.scope } });
    }
  }

  function apply(resp) {
    for (const [id, fig] of Object.entries(resp.outputs)) draw(id, fig);
  }

  async function change(control, value) {
    const url = "/api/sessions/" + session + "/controls/" + control +
      "?value=" + encodeURIComponent(value);
    const resp = await fetch(url, { method: "POST" });
    if (resp.ok) apply(await resp.json());
  }

  function dropdown(spec) {
    const select = document.createElement("select");
    select.id = spec.id;
    select.style.width = spec.width;
    select.multiple = spec.multi;
    for (const opt of spec.options) {
      const o = document.createElement("option");
      o.value = opt.value;
      o.textContent = opt.label;
      if (opt.value === spec.value) o.selected = true;
      select.appendChild(o);
    }
    select.addEventListener("change", () => change(spec.control, select.value));
    return select;
  }

  async function main() {
    const layout = await (await fetch("/api/layout")).json();
    const h1 = document.createElement("h1");
    h1.textContent = layout.heading;
    root.appendChild(h1);
    for (const child of layout.children) {
      if (child.component === "dropdown") {
        root.appendChild(dropdown(child));
        root.appendChild(document.createElement("br"));
      } else if (child.component === "graph") {
        const div = document.createElement("div");
        div.id = child.id;
        div.className = "graph";
        root.appendChild(div);
      }
    }
    const created = await (await fetch("/api/sessions", { method: "POST" })).json();
    session = created.session;
    apply(created);
  }

  main();
})();
</script>
</body>
</html>
"#;

/// Render the page shell
pub fn render_page() -> String {
    PAGE_TEMPLATE
        .replace("{{title}}", DASHBOARD_HEADING)
        .replace("{{plotly}}", PLOTLY_CDN_URL)
}
