//! Server-rendered dashboard pages
//!
//! Plain HTML assembled in handlers and served with [`axum::response::Html`].
//! The pages drive the JSON API for mutations and feed Chart.js (CDN) with
//! the same oldest-first series the chart endpoint exposes.

use super::api::chart_series;
use super::error::ApiError;
use super::AppState;
use crate::domain::{Machine, MachineStatus, StatusObservation};
use crate::ledger::DETAIL_HISTORY_LIMIT;
use crate::registry::MAX_PAGE_SIZE;
use axum::{
    extract::{Path, State},
    response::Html,
};
use sea_orm::Iterable;

/// GET / - machine overview with latest status per machine
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let machines = state.registry.list(0, MAX_PAGE_SIZE).await?;

    let mut rows = String::new();
    for machine in &machines {
        let latest = state.ledger.latest(machine.id).await?;
        rows.push_str(&machine_row(machine, latest.as_ref()));
    }

    let body = format!(
        r#"<h1>Machine Monitoring</h1>
<table>
  <thead>
    <tr><th>Name</th><th>Location</th><th>Status</th><th></th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
<h2>Add machine</h2>
<form id="machine-form">
  <input name="name" placeholder="Name" required>
  <input name="location" placeholder="Location" required>
  <button type="submit">Register</button>
</form>
<script>
document.getElementById('machine-form').addEventListener('submit', async (e) => {{
  e.preventDefault();
  const data = Object.fromEntries(new FormData(e.target));
  const resp = await fetch('/api/machines', {{
    method: 'POST',
    headers: {{'Content-Type': 'application/json'}},
    body: JSON.stringify(data),
  }});
  if (resp.ok) {{ window.location.reload(); }}
  else {{ alert((await resp.json()).error); }}
}});
async function logStatus(machineId, status) {{
  const resp = await fetch(`/api/machines/${{machineId}}/status`, {{
    method: 'POST',
    headers: {{'Content-Type': 'application/json'}},
    body: JSON.stringify({{status}}),
  }});
  if (resp.ok) {{ window.location.reload(); }}
  else {{ alert((await resp.json()).error); }}
}}
</script>"#,
    );

    Ok(Html(page("Machine Monitoring", &body)))
}

/// GET /machines/{id} - machine detail with recent history and a
/// time-series chart of the full log
pub async fn machine_detail(
    State(state): State<AppState>,
    Path(machine_id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    let machine = state.registry.get(machine_id).await?;
    let recent = state.ledger.recent(machine_id, DETAIL_HISTORY_LIMIT).await?;
    let history = state.ledger.full_history(machine_id).await?;

    let (labels, statuses) = chart_series(&history);
    let labels_json = serde_json::to_string(&labels).unwrap_or_else(|_| "[]".into());
    let statuses_json = serde_json::to_string(&statuses).unwrap_or_else(|_| "[]".into());

    let current = recent
        .first()
        .map(|obs| status_badge(obs.status))
        .unwrap_or_else(|| "<em>no observations yet</em>".to_string());

    let mut history_items = String::new();
    for obs in &recent {
        history_items.push_str(&format!(
            "    <li>{} <time>{}</time></li>\n",
            status_badge(obs.status),
            obs.timestamp.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    let body = format!(
        r#"<p><a href="/">&larr; All machines</a></p>
<h1>{name}</h1>
<p>Location: {location} &middot; Current status: {current}</p>
<h2>Recent status</h2>
<ul>
{history_items}</ul>
<h2>Status history</h2>
<canvas id="status-chart"></canvas>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
<script>
const labels = {labels_json};
const statuses = {statuses_json};
const levels = ['idle', 'running', 'error', 'maintenance'];
new Chart(document.getElementById('status-chart'), {{
  type: 'line',
  data: {{
    labels,
    datasets: [{{
      label: 'status',
      data: statuses.map(s => levels.indexOf(s)),
      stepped: true,
    }}],
  }},
  options: {{
    scales: {{
      y: {{
        ticks: {{ callback: (value) => levels[value] ?? '' }},
        min: 0,
        max: levels.length - 1,
      }},
    }},
  }},
}});
</script>"#,
        name = escape(&machine.name),
        location = escape(&machine.location),
    );

    Ok(Html(page(&machine.name, &body)))
}

fn machine_row(machine: &Machine, latest: Option<&StatusObservation>) -> String {
    let status = latest
        .map(|obs| status_badge(obs.status))
        .unwrap_or_else(|| "<em>unknown</em>".to_string());

    let mut buttons = String::new();
    for status in MachineStatus::iter() {
        buttons.push_str(&format!(
            r#"<button onclick="logStatus({id}, '{status}')">{status}</button> "#,
            id = machine.id,
        ));
    }

    format!(
        r#"    <tr>
      <td><a href="/machines/{id}">{name}</a></td>
      <td>{location}</td>
      <td>{status}</td>
      <td>{buttons}</td>
    </tr>
"#,
        id = machine.id,
        name = escape(&machine.name),
        location = escape(&machine.location),
    )
}

fn status_badge(status: MachineStatus) -> String {
    format!(r#"<span class="status status-{status}">{status}</span>"#)
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ text-align: left; padding: 0.4rem 0.8rem; border-bottom: 1px solid #ddd; }}
.status {{ padding: 0.1rem 0.5rem; border-radius: 0.5rem; background: #eee; }}
.status-running {{ background: #c6efce; }}
.status-error {{ background: #ffc7ce; }}
.status-maintenance {{ background: #ffeb9c; }}
canvas {{ max-height: 20rem; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Minimal HTML escaping for text interpolated into markup
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
