use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Mutex;
use tokio::time::interval;

use snake_engine::snake::{Key, SnakeCommand, SnakeGameState, TickOutcome};
use snake_engine::{debug, log};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GameSummary {
    pub ticks_played: u64,
    pub apples_eaten: u32,
    pub deaths: u32,
    pub best_score: u32,
    pub final_score: u32,
}

impl GameSummary {
    fn record(&mut self, outcome: TickOutcome, score: u32) {
        match outcome {
            TickOutcome::Paused => return,
            TickOutcome::Moved => {}
            TickOutcome::AteApple { score: new_score } => {
                self.apples_eaten += 1;
                self.best_score = self.best_score.max(new_score);
            }
            TickOutcome::Died { final_score, .. } => {
                self.deaths += 1;
                self.best_score = self.best_score.max(final_score);
            }
        }
        self.ticks_played += 1;
        self.final_score = score;
    }
}

/// Ticks the game on a fixed interval while a second task feeds it keys read
/// from `input`. Both go through the same lock. Returns once `max_ticks`
/// non-paused ticks have run, `input` ends or fails, or Ctrl+C arrives.
pub async fn run_game_loop<R>(
    state: SnakeGameState,
    tick_interval: Duration,
    max_ticks: Option<u64>,
    input: R,
) -> GameSummary
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let game_state = Arc::new(Mutex::new(state));
    let mut input_handle = tokio::spawn(forward_input(game_state.clone(), input));

    let mut tick_interval_timer = interval(tick_interval);
    let mut summary = GameSummary::default();

    let shutdown_signal = tokio::signal::ctrl_c();
    tokio::pin!(shutdown_signal);

    loop {
        tokio::select! {
            _ = tick_interval_timer.tick() => {
                let mut game = game_state.lock().await;
                let outcome = game.tick();
                summary.record(outcome, game.score());
                report(outcome, &game);
                drop(game);

                if max_ticks.is_some_and(|max| summary.ticks_played >= max) {
                    break;
                }
            }
            _ = &mut input_handle => {
                log!("Input finished, stopping");
                break;
            }
            _ = &mut shutdown_signal => {
                log!("Shutdown signal received");
                break;
            }
        }
    }

    input_handle.abort();
    summary
}

fn report(outcome: TickOutcome, game: &SnakeGameState) {
    match outcome {
        TickOutcome::AteApple { score } => {
            let apple = game.apple_cell();
            log!("Apple eaten, score {}. Next apple at ({}, {})", score, apple.x, apple.y);
        }
        TickOutcome::Moved => {
            let head = game.snake().head();
            debug!("Head at ({}, {}), length {}", head.x, head.y, game.snake_length());
        }
        TickOutcome::Paused | TickOutcome::Died { .. } => {}
    }
}

async fn forward_input<R>(game_state: Arc<Mutex<SnakeGameState>>, input: R)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let mut game = game_state.lock().await;
                for key in line.chars().filter_map(Key::from_char) {
                    game.apply_command(SnakeCommand::from_key(key));
                }
            }
            Ok(None) => {
                debug!("Input closed");
                break;
            }
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::SessionRng;
    use snake_engine::snake::{DeathReason, FieldSize};

    fn create_state() -> SnakeGameState {
        SnakeGameState::new(FieldSize::new(20, 20), 5, SessionRng::new(42))
    }

    #[test]
    fn test_summary_records_outcomes() {
        let mut summary = GameSummary::default();
        summary.record(TickOutcome::Moved, 0);
        summary.record(TickOutcome::AteApple { score: 1 }, 1);
        summary.record(TickOutcome::AteApple { score: 2 }, 2);
        summary.record(
            TickOutcome::Died {
                reason: DeathReason::WallCollision,
                final_score: 2,
            },
            0,
        );
        summary.record(TickOutcome::Moved, 0);

        assert_eq!(
            summary,
            GameSummary {
                ticks_played: 5,
                apples_eaten: 2,
                deaths: 1,
                best_score: 2,
                final_score: 0,
            }
        );
    }

    #[test]
    fn test_paused_ticks_are_not_counted() {
        let mut summary = GameSummary::default();
        summary.record(TickOutcome::Paused, 0);
        assert_eq!(summary, GameSummary::default());
    }

    #[tokio::test]
    async fn test_loop_stops_after_max_ticks() {
        let (_writer, reader) = tokio::io::duplex(64);
        let summary =
            run_game_loop(create_state(), Duration::from_millis(1), Some(5), reader).await;
        assert_eq!(summary.ticks_played, 5);
    }

    #[tokio::test]
    async fn test_loop_stops_when_input_ends() {
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run_game_loop(create_state(), Duration::from_millis(1), None, &b""[..]),
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_loop_stops_when_writer_closes() {
        let (writer, reader) = tokio::io::duplex(64);
        let game = tokio::spawn(run_game_loop(
            create_state(),
            Duration::from_millis(1),
            None,
            reader,
        ));

        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(writer);

        let result = tokio::time::timeout(Duration::from_secs(5), game).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_forward_input_applies_keys() {
        let game_state = Arc::new(Mutex::new(create_state()));
        forward_input(game_state.clone(), &b"w\no\n"[..]).await;

        let game = game_state.lock().await;
        assert_eq!(game.snake().facing(), snake_engine::snake::Direction::North);
        assert!(game.is_auto_mode());
    }
}
