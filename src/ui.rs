pub fn page() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Kill Tally</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #171225;
      --bg-2: #3b2450;
      --ink: #efe9fb;
      --muted: #b3a4cf;
      --accent: #f472b6;
      --accent-2: #a855f7;
      --gold: #facc15;
      --card: rgba(255, 255, 255, 0.06);
      --line: rgba(168, 85, 247, 0.3);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #241436 60%, var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(560px, 100%);
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 5vw, 2.8rem);
      margin: 0;
      text-align: center;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      background: linear-gradient(90deg, var(--accent-2), var(--accent));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .card {
      background: var(--card);
      border: 2px solid var(--line);
      border-radius: 24px;
      box-shadow: var(--shadow);
      backdrop-filter: blur(12px);
      padding: 28px;
      display: grid;
      gap: 18px;
      text-align: center;
    }

    .card.celebrate {
      animation: pulse-scale 600ms ease;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.14em;
      color: var(--muted);
    }

    .daily {
      font-size: clamp(3.5rem, 12vw, 5.5rem);
      font-weight: 700;
      line-height: 1;
      background: linear-gradient(90deg, var(--accent), #f87171);
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .record-line {
      font-size: 0.95rem;
      color: var(--muted);
    }

    .record-line strong {
      color: var(--gold);
    }

    .chart {
      display: flex;
      align-items: flex-end;
      justify-content: center;
      gap: 4px;
      height: 72px;
      padding-top: 16px;
      border-top: 1px solid var(--line);
    }

    .chart .bar {
      flex: 1;
      min-height: 4px;
      border-radius: 4px 4px 0 0;
      background: linear-gradient(to top, var(--accent-2), var(--accent));
    }

    .chart .bar.live {
      background: linear-gradient(to top, var(--accent), #f87171);
      opacity: 0.75;
    }

    .chart-caption {
      font-size: 0.75rem;
      color: var(--muted);
    }

    form {
      display: grid;
      gap: 12px;
    }

    input[type="text"] {
      width: 100%;
      padding: 14px 18px;
      font-size: 1.1rem;
      font-family: inherit;
      color: var(--ink);
      background: rgba(255, 255, 255, 0.05);
      border: 2px solid var(--line);
      border-radius: 14px;
      outline: none;
      transition: border-color 150ms ease;
    }

    input[type="text"]:focus {
      border-color: var(--accent-2);
    }

    .checkline {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 8px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 14px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      color: white;
      background: linear-gradient(90deg, var(--accent-2), var(--accent));
      transition: transform 150ms ease, box-shadow 150ms ease;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    button:hover {
      transform: translateY(-2px);
      box-shadow: 0 12px 28px rgba(168, 85, 247, 0.4);
    }

    button:active {
      transform: translateY(0);
    }

    button.ghost {
      background: transparent;
      border: 1px solid var(--line);
      color: var(--muted);
      font-size: 0.8rem;
      padding: 10px 14px;
      text-transform: none;
      letter-spacing: normal;
    }

    .totals {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 12px;
      padding: 18px;
      background: var(--card);
      border: 1px solid rgba(255, 255, 255, 0.1);
      border-radius: 16px;
    }

    .totals .value {
      font-size: 1.8rem;
      font-weight: 700;
      color: var(--accent-2);
    }

    .resets {
      display: flex;
      justify-content: center;
      gap: 12px;
    }

    .status {
      min-height: 1.3em;
      font-size: 0.95rem;
      text-align: center;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #fb7185;
    }

    .status[data-type="ok"] {
      color: #4ade80;
    }

    .hidden {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @keyframes pulse-scale {
      0% { transform: scale(1); }
      40% { transform: scale(1.04); }
      100% { transform: scale(1); }
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Kill Tally</h1>

    <section id="setup-screen" class="card hidden">
      <div>
        <div class="label">Welcome</div>
        <p>Enter your current lifetime total to get started.</p>
      </div>
      <form id="setup-form">
        <input type="text" id="setup-input" inputmode="numeric" placeholder="Current total" autocomplete="off" />
        <button type="submit">Start Tracking</button>
      </form>
    </section>

    <section id="main-screen" class="hidden">
      <div class="card" id="daily-card">
        <div class="label">Today</div>
        <div class="daily" id="daily">0</div>
        <div class="record-line hidden" id="record-line">
          Record: <strong id="record">0</strong>
        </div>
        <div class="chart hidden" id="chart"></div>
        <div class="chart-caption hidden" id="chart-caption">Last 7 days</div>
      </div>

      <div class="card">
        <form id="report-form">
          <input type="text" id="report-input" inputmode="numeric" placeholder="Enter new total" autocomplete="off" />
          <label class="checkline">
            <input type="checkbox" id="skip-daily" />
            Correction, don't count toward today
          </label>
          <button type="submit">Update</button>
        </form>
      </div>

      <div class="totals">
        <span class="label">Lifetime total</span>
        <span class="value" id="total">0</span>
      </div>

      <div class="resets">
        <button class="ghost" id="reset-record" type="button">Reset record</button>
        <button class="ghost" id="reset-all" type="button">Reset everything</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const setupScreen = document.getElementById('setup-screen');
    const mainScreen = document.getElementById('main-screen');
    const setupForm = document.getElementById('setup-form');
    const setupInput = document.getElementById('setup-input');
    const reportForm = document.getElementById('report-form');
    const reportInput = document.getElementById('report-input');
    const skipDaily = document.getElementById('skip-daily');
    const dailyCard = document.getElementById('daily-card');
    const dailyEl = document.getElementById('daily');
    const recordLine = document.getElementById('record-line');
    const recordEl = document.getElementById('record');
    const totalEl = document.getElementById('total');
    const chartEl = document.getElementById('chart');
    const chartCaption = document.getElementById('chart-caption');
    const statusEl = document.getElementById('status');

    let statusTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (statusTimer) {
        clearTimeout(statusTimer);
        statusTimer = null;
      }
      if (message) {
        statusTimer = setTimeout(() => {
          statusEl.textContent = '';
          statusEl.dataset.type = '';
        }, 3000);
      }
    };

    const renderChart = (trend) => {
      const finished = trend.filter((point) => !point.live);
      if (!finished.length) {
        chartEl.classList.add('hidden');
        chartCaption.classList.add('hidden');
        return;
      }
      const max = Math.max(...trend.map((point) => point.kills), 1);
      chartEl.innerHTML = trend
        .map((point) => {
          const height = Math.max((point.kills / max) * 100, 5);
          const cls = point.live ? 'bar live' : 'bar';
          return `<div class="${cls}" style="height: ${height}%" title="${point.date}: ${point.kills}"></div>`;
        })
        .join('');
      chartEl.classList.remove('hidden');
      chartCaption.classList.remove('hidden');
    };

    const render = (data) => {
      setupScreen.classList.toggle('hidden', !data.needs_setup);
      mainScreen.classList.toggle('hidden', data.needs_setup);
      if (data.needs_setup) {
        setupInput.focus();
        return;
      }
      dailyEl.textContent = data.daily_kills;
      totalEl.textContent = data.total;
      recordEl.textContent = data.record;
      recordLine.classList.toggle('hidden', data.record === 0);
      renderChart(data.trend);
    };

    const celebrate = () => {
      dailyCard.classList.remove('celebrate');
      void dailyCard.offsetWidth;
      dailyCard.classList.add('celebrate');
    };

    const refresh = async () => {
      const res = await fetch('/api/tally');
      if (!res.ok) {
        throw new Error('Unable to load tally');
      }
      render(await res.json());
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    setupForm.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/setup', { total: setupInput.value })
        .then((data) => {
          setupInput.value = '';
          render(data);
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    reportForm.addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/report', { total: reportInput.value, skip_daily: skipDaily.checked })
        .then((data) => {
          reportInput.value = '';
          skipDaily.checked = false;
          if (data.new_record) {
            celebrate();
            setStatus('New record!', 'ok');
          }
          return refresh();
        })
        .catch((err) => {
          reportInput.value = '';
          setStatus(err.message, 'error');
        });
    });

    document.getElementById('reset-record').addEventListener('click', () => {
      if (!window.confirm('Clear the daily history and record?')) {
        return;
      }
      post('/api/reset/record', { confirmed: true })
        .then(render)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('reset-all').addEventListener('click', () => {
      if (!window.confirm('Delete everything and start over?')) {
        return;
      }
      post('/api/reset/all', { confirmed: true })
        .then(render)
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
