// Tic-tac-toe as a grid of buttons.
//
// Rules live in core::tictactoe; this file renders the board, listens for
// button presses on the game message and locks the board when the game ends
// or everyone walks away.

use crate::core::errors::{BoxError, CommandError};
use crate::core::tictactoe::{Mark, TicTacToe, BOARD_SIZE};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;
use std::time::Duration;

/// How long the board waits for the next move before locking.
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

const CELL_ID_PREFIX: &str = "tictactoe:";

/// Starts a tic-tac-toe game.
#[poise::command(prefix_command)]
pub async fn tic(ctx: Context<'_>) -> Result<(), Error> {
    run_game(ctx)
        .await
        .map_err(|e| CommandError::wrapped("tic", e))
}

async fn run_game(ctx: Context<'_>) -> Result<(), BoxError> {
    let mut game = TicTacToe::new();

    let handle = ctx
        .send(
            poise::CreateReply::default()
                .content("Tic Tac Toe: X goes first")
                .components(board_rows(&game, false)),
        )
        .await?;
    let message_id = handle.message().await?.id;

    while let Some(press) = serenity::ComponentInteractionCollector::new(ctx.serenity_context())
        .message_id(message_id)
        .timeout(IDLE_TIMEOUT)
        .await
    {
        let Some(index) = parse_cell(&press.data.custom_id) else {
            continue;
        };

        if let Err(e) = game.play(index) {
            press
                .create_response(
                    ctx,
                    serenity::CreateInteractionResponse::Message(
                        serenity::CreateInteractionResponseMessage::new()
                            .content(e.to_string())
                            .ephemeral(true),
                    ),
                )
                .await?;
            continue;
        }

        press
            .create_response(
                ctx,
                serenity::CreateInteractionResponse::UpdateMessage(
                    serenity::CreateInteractionResponseMessage::new()
                        .content(game.headline())
                        .components(board_rows(&game, false)),
                ),
            )
            .await?;

        if game.is_over() {
            tracing::debug!(status = ?game.status(), "Tic-tac-toe game finished");
            return Ok(());
        }
    }

    handle
        .edit(
            ctx,
            poise::CreateReply::default()
                .content(format!("{} (game timed out)", game.headline()))
                .components(board_rows(&game, true)),
        )
        .await?;

    Ok(())
}

fn cell_id(index: usize) -> String {
    format!("{}{}", CELL_ID_PREFIX, index)
}

fn parse_cell(custom_id: &str) -> Option<usize> {
    custom_id
        .strip_prefix(CELL_ID_PREFIX)?
        .parse()
        .ok()
        .filter(|index| *index < BOARD_SIZE)
}

/// Three rows of three buttons. `locked` disables every cell.
fn board_rows(game: &TicTacToe, locked: bool) -> Vec<serenity::CreateActionRow> {
    (0..3)
        .map(|row| {
            let buttons = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let mark = game.cell(index);

                    let style = match mark {
                        _ if game.is_winning_cell(index) => serenity::ButtonStyle::Success,
                        Some(Mark::X) => serenity::ButtonStyle::Danger,
                        Some(Mark::O) => serenity::ButtonStyle::Primary,
                        None => serenity::ButtonStyle::Secondary,
                    };

                    serenity::CreateButton::new(cell_id(index))
                        // Discord rejects empty labels, so free cells get a zero-width space.
                        .label(mark.map(Mark::symbol).unwrap_or("\u{200b}"))
                        .style(style)
                        .disabled(locked || mark.is_some() || game.is_over())
                })
                .collect();

            serenity::CreateActionRow::Buttons(buttons)
        })
        .collect()
}
