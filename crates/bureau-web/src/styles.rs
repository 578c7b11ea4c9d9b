//! Inline stylesheet and script for the dashboard pages
//!
//! Pages are self-contained: no static asset route is needed.

/// Dashboard CSS. Dark is the default; `html.light` switches palettes.
pub const DASHBOARD_CSS: &str = r#"
:root {
  --bg: #09090b;
  --surface: #111113;
  --surface-raised: #18181b;
  --border: #27272a;
  --text: #fafafa;
  --text-muted: #a1a1aa;
  --accent: #2dd4bf;
  --accent-strong: #004d40;
  --danger: #f87171;
  --mark: #facc15;
  --radius: 8px;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  color-scheme: dark;
}
html.light {
  --bg: #f4f4f5;
  --surface: #ffffff;
  --surface-raised: #f9fafb;
  --border: #e4e4e7;
  --text: #09090b;
  --text-muted: #52525b;
  --accent: #0f766e;
  --danger: #b91c1c;
  --mark: #fde68a;
  color-scheme: light;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-size: 14px; }
a { color: inherit; text-decoration: none; }
.app-shell { display: flex; min-height: 100vh; }
.app-sidebar {
  width: 220px; flex-shrink: 0; display: flex; flex-direction: column;
  background: var(--surface); border-right: 1px solid var(--border); padding: 16px;
}
.brand { font-size: 18px; font-weight: 700; margin-bottom: 24px; }
.brand span { color: var(--accent); }
.sidebar-nav { display: flex; flex-direction: column; gap: 4px; flex: 1; }
.nav-item { padding: 8px 12px; border-radius: var(--radius); color: var(--text-muted); }
.nav-item:hover { background: var(--surface-raised); color: var(--text); }
.nav-item.active { background: var(--surface-raised); color: var(--accent); font-weight: 600; }
.sidebar-footer { display: flex; flex-direction: column; gap: 8px; }
.app-main { flex: 1; padding: 24px 32px; min-width: 0; }
.page-title { font-size: 24px; font-weight: 700; margin: 0 0 16px; }
.card {
  background: var(--surface); border: 1px solid var(--border);
  border-radius: var(--radius); padding: 16px; margin-bottom: 16px;
}
.card h2 { font-size: 16px; margin: 0 0 12px; }
.btn {
  display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px;
  border: 1px solid var(--border); border-radius: var(--radius);
  background: var(--surface-raised); color: var(--text); cursor: pointer; font: inherit;
}
.btn:hover { border-color: var(--accent); }
.btn.primary { background: var(--accent-strong); border-color: var(--accent-strong); color: #fff; }
.btn.disabled { opacity: 0.5; pointer-events: none; }
.filter-form { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; align-items: end; }
.field { display: flex; flex-direction: column; gap: 4px; color: var(--text-muted); font-size: 12px; }
input, select {
  font: inherit; color: var(--text); background: var(--surface-raised);
  border: 1px solid var(--border); border-radius: var(--radius); padding: 6px 8px;
}
.toolbar { display: flex; flex-wrap: wrap; gap: 8px; align-items: center; margin-bottom: 12px; }
.toolbar .search { flex: 1; min-width: 200px; }
.dropdown { position: relative; }
.dropdown > summary { list-style: none; }
.dropdown > summary::-webkit-details-marker { display: none; }
.dropdown .menu {
  position: absolute; right: 0; z-index: 10; min-width: 200px; margin-top: 4px;
  display: flex; flex-direction: column; gap: 2px; padding: 6px;
  background: var(--surface-raised); border: 1px solid var(--border); border-radius: var(--radius);
}
.menu a, .menu button {
  text-align: left; padding: 6px 8px; border-radius: 6px; border: 0;
  background: none; color: var(--text); font: inherit; cursor: pointer;
}
.menu a:hover, .menu button:hover { background: var(--surface); }
.filter-panel { display: grid; gap: 8px; }
table.data-table { width: 100%; border-collapse: collapse; }
.data-table th, .data-table td { padding: 8px; border-bottom: 1px solid var(--border); text-align: left; }
.data-table th { color: var(--text-muted); font-weight: 500; white-space: nowrap; }
.data-table tr.selected td { background: var(--surface-raised); }
.data-table td.truncate { max-width: 220px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.data-table td.numeric { text-align: right; font-variant-numeric: tabular-nums; }
.data-table .empty { text-align: center; color: var(--text-muted); height: 96px; }
.sort-indicator { color: var(--accent); margin-left: 4px; }
.checkbox {
  display: inline-block; width: 16px; height: 16px; border-radius: 4px;
  border: 1px solid var(--text-muted); text-align: center; line-height: 14px; font-size: 12px;
}
.checkbox[aria-checked="true"], .checkbox[aria-checked="mixed"] {
  background: var(--accent-strong); border-color: var(--accent); color: #fff;
}
mark { background: var(--mark); color: #09090b; border-radius: 2px; }
.badge { display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 12px; font-weight: 600; }
.badge-default { background: var(--accent-strong); color: #fff; }
.badge-secondary { background: var(--surface-raised); color: var(--text); }
.badge-outline { border: 1px solid var(--border); color: var(--text-muted); }
.table-footer { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 12px; margin-top: 12px; color: var(--text-muted); }
.pagination { display: flex; align-items: center; gap: 8px; }
.panel-error { border-color: var(--danger); color: var(--danger); }
.panel-empty { color: var(--text-muted); }
.chart svg { width: 100%; height: auto; }
.chart .bar { fill: var(--accent); }
.chart .axis { stroke: var(--border); }
.chart text { fill: var(--text-muted); font-size: 11px; }
.not-found { text-align: center; padding: 64px 0; }
"#;

/// Theme toggle, auto-submitting selects and row action menus
pub const DASHBOARD_SCRIPT: &str = r#"
(() => {
  const root = document.documentElement;
  const stored = localStorage.getItem('bureau-theme');
  if (stored === 'light') {
    root.classList.add('light');
    root.classList.remove('dark');
  }
  document.querySelectorAll('[data-role="theme-toggle"]').forEach(btn => {
    btn.addEventListener('click', () => {
      const light = root.classList.toggle('light');
      root.classList.toggle('dark', !light);
      localStorage.setItem('bureau-theme', light ? 'light' : 'dark');
    });
  });
  document.querySelectorAll('select[data-autosubmit]').forEach(select => {
    select.addEventListener('change', () => select.form.submit());
  });
  document.querySelectorAll('[data-copy]').forEach(btn => {
    btn.addEventListener('click', () => navigator.clipboard.writeText(btn.dataset.copy));
  });
  document.querySelectorAll('[data-details]').forEach(btn => {
    btn.addEventListener('click', () => alert(`Viewing details for: ${btn.dataset.details}`));
  });
})();
"#;
