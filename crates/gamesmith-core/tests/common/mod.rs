#![allow(dead_code)]

//! Shared fixtures for scenario tests: a fully conforming artifact, degraded
//! variants derived from it, and scripted repairer backends.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use gamesmith_core::{CodeRepairer, RepairError};

/// A generated paddle minigame that satisfies every rubric subcheck and
/// guards all three default defect patterns.
pub const GOOD_ARTIFACT: &str = r#"
const canvas = document.getElementById('game');
const ctx = canvas.getContext('2d');
const scoreEl = document.getElementById('score');
const livesEl = document.getElementById('lives');

let score = 0;
let lives = 3;
let gameOver = false;
let gameStarted = false;
let timeLeft = 60;

const paddle = { x: 120, y: 440, w: 80, h: 12 };
const ball = { x: 160, y: 200, vx: 2, vy: 2, r: 6 };

const bridge = new GameBridge({ channel: 'minigame' });
bridge.start();

bridge.on('ready', () => {
  gameStarted = true;
});

bridge.on('sensor', (msg) => {
  const { alpha, beta, gamma } = msg.payload;
  handleSensorData(alpha, beta, gamma);
});

bridge.on('disconnect', () => {
  gameOver = true;
});

function handleSensorData(alpha, beta, gamma) {
  const tilt = Math.max(-45, Math.min(45, gamma));
  paddle.x += tilt * 0.4;
  paddle.x = Math.max(0, Math.min(canvas.width - paddle.w, paddle.x));
}

function update() {
  if (gameOver) {
    return;
  }
  if (!gameStarted) {
    ball.x = paddle.x + paddle.w / 2;
    return;
  }
  ball.x += ball.vx;
  ball.y += ball.vy;
  if (ball.y + ball.r >= paddle.y && ball.vy > 0) {
    ball.vy = -ball.vy;
    score += 1;
  }
  if (ball.y > canvas.height) {
    lives -= 1;
    if (lives <= 0) {
      gameOver = true;
    }
  }
}

function draw() {
  ctx.clearRect(0, 0, canvas.width, canvas.height);
}

function gameLoop() {
  update();
  draw();
  updateHud();
  requestAnimationFrame(gameLoop);
}

function updateHud() {
  scoreEl.textContent = 'Score: ' + score;
  livesEl.textContent = 'Lives: ' + lives;
}

const timerId = setInterval(() => {
  if (gameStarted && !gameOver) {
    timeLeft -= 1;
  }
  if (timeLeft <= 0) {
    gameOver = true;
    clearInterval(timerId);
  }
}, 1000);

requestAnimationFrame(gameLoop);
"#;

/// Good artifact minus the disconnect handler, plus a lingering use of the
/// known-wrong `rawData` alias: exactly 6 of 8 SDK subchecks pass.
pub fn sdk_degraded_artifact() -> String {
    GOOD_ARTIFACT
        .replace(
            "bridge.on('disconnect', () => {\n  gameOver = true;\n});\n\n",
            "",
        )
        .replace(
            "const { alpha, beta, gamma } = msg.payload;",
            "const { alpha, beta, gamma } = msg.payload;\n  const legacy = msg.rawData;",
        )
}

/// Good artifact with the ball pinned to the paddle unconditionally and no
/// pre-start guard left anywhere in the program.
pub fn pinned_ball_artifact() -> String {
    GOOD_ARTIFACT.replace(
        "  if (!gameStarted) {\n    ball.x = paddle.x + paddle.w / 2;\n    return;\n  }\n",
        "  ball.x = paddle.x + paddle.w / 2;\n",
    )
}

/// Good artifact whose countdown is never decremented.
pub fn stalled_timer_artifact() -> String {
    GOOD_ARTIFACT.replace(
        "  if (gameStarted && !gameOver) {\n    timeLeft -= 1;\n  }\n",
        "",
    )
}

/// A near-empty program: fails most rubric categories outright.
pub const BARE_ARTIFACT: &str = "let score = 0;\n";

/// Backend that replays a scripted list of responses in order; once the
/// script runs out it keeps failing.
pub struct ScriptedRepairer {
    responses: Mutex<VecDeque<Result<String, RepairError>>>,
    calls: AtomicU32,
}

impl ScriptedRepairer {
    pub fn new(responses: Vec<Result<String, RepairError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeRepairer for ScriptedRepairer {
    async fn repair(
        &self,
        _artifact_text: &str,
        _issues: &[String],
        _attempt: u32,
    ) -> Result<String, RepairError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(RepairError::Backend("script exhausted".to_string())))
    }
}

/// Backend that takes a fixed amount of (tokio) time per call before
/// returning the same response text.
pub struct SlowRepairer {
    pub delay: Duration,
    pub response: String,
}

#[async_trait]
impl CodeRepairer for SlowRepairer {
    async fn repair(
        &self,
        _artifact_text: &str,
        _issues: &[String],
        _attempt: u32,
    ) -> Result<String, RepairError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }
}
