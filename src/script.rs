// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Line-based edit scripts for the headless driver.
//!
//! One command per line, `#` starts a comment. Anchors are addressed by
//! their current index in the path, coordinates are canvas coordinates.
//!
//! ```text
//! transform a b c d e f
//! select i
//! deselect
//! hover x y
//! drag-anchor i x y
//! drag-control i cp1|cp2 x y
//! click x y
//! delete i
//! toggle i
//! nudge dx dy [shift]
//! ```

use crate::canvas::Canvas;
use crate::editing::EditSession;
use crate::model::EntityId;
use crate::path::ControlSide;
use anyhow::{Context, Result, anyhow, bail};
use kurbo::{Affine, Point};

/// A parsed script command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Transform(Affine),
    Select(usize),
    Deselect,
    Hover(Point),
    DragAnchor(usize, Point),
    DragControl(usize, ControlSide, Point),
    Click(Point),
    Delete(usize),
    Toggle(usize),
    Nudge { dx: f64, dy: f64, shift: bool },
}

/// Outcome counts of a script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub rejected: usize,
}

/// Parse a whole script
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let command =
            parse_command(line).with_context(|| format!("line {}: `{}`", number + 1, line))?;
        commands.push(command);
    }
    Ok(commands)
}

/// Parse a single command line
pub fn parse_command(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        bail!("empty command");
    };
    let args: Vec<&str> = words.collect();

    let command = match (name, args.as_slice()) {
        ("transform", [a, b, c, d, e, f]) => Command::Transform(Affine::new([
            number(a)?,
            number(b)?,
            number(c)?,
            number(d)?,
            number(e)?,
            number(f)?,
        ])),
        ("select", [i]) => Command::Select(index(i)?),
        ("deselect", []) => Command::Deselect,
        ("hover", [x, y]) => Command::Hover(point(x, y)?),
        ("drag-anchor", [i, x, y]) => Command::DragAnchor(index(i)?, point(x, y)?),
        ("drag-control", [i, side, x, y]) => {
            let side = match *side {
                "cp1" => ControlSide::In,
                "cp2" => ControlSide::Out,
                other => bail!("expected cp1 or cp2, got `{}`", other),
            };
            Command::DragControl(index(i)?, side, point(x, y)?)
        }
        ("click", [x, y]) => Command::Click(point(x, y)?),
        ("delete", [i]) => Command::Delete(index(i)?),
        ("toggle", [i]) => Command::Toggle(index(i)?),
        ("nudge", [dx, dy]) => Command::Nudge {
            dx: number(dx)?,
            dy: number(dy)?,
            shift: false,
        },
        ("nudge", [dx, dy, "shift"]) => Command::Nudge {
            dx: number(dx)?,
            dy: number(dy)?,
            shift: true,
        },
        _ => bail!("unknown command or wrong arguments"),
    };
    Ok(command)
}

fn number(word: &str) -> Result<f64> {
    word.parse()
        .map_err(|_| anyhow!("`{}` is not a number", word))
}

fn index(word: &str) -> Result<usize> {
    word.parse()
        .map_err(|_| anyhow!("`{}` is not an anchor index", word))
}

fn point(x: &str, y: &str) -> Result<Point> {
    Ok(Point::new(number(x)?, number(y)?))
}

/// Run commands against a session
///
/// Commands the session rejects are logged and counted, and the run
/// continues with the next one.
pub fn execute<C: Canvas>(session: &mut EditSession<C>, commands: &[Command]) -> ScriptReport {
    let mut report = ScriptReport::default();
    for command in commands {
        if apply(session, command) {
            report.applied += 1;
        } else {
            tracing::debug!("Rejected {:?}", command);
            report.rejected += 1;
        }
    }
    report
}

fn apply<C: Canvas>(session: &mut EditSession<C>, command: &Command) -> bool {
    match *command {
        Command::Transform(affine) => session.on_transform(affine).is_ok(),
        Command::Select(i) => {
            anchor_at(session, i).is_some_and(|id| session.click_anchor(id).is_ok())
        }
        Command::Deselect => {
            session.deselect_anchor();
            true
        }
        Command::Hover(pos) => {
            session.pointer_moved(pos);
            true
        }
        Command::DragAnchor(i, to) => {
            anchor_at(session, i).is_some_and(|id| session.drag_anchor(id, to).is_ok())
        }
        Command::DragControl(i, side, to) => anchor_at(session, i)
            .is_some_and(|id| session.drag_control_handle(id, side, to).is_ok()),
        Command::Click(pos) => session.handle_path_click(pos.x, pos.y).is_some(),
        Command::Delete(i) => {
            anchor_at(session, i).is_some_and(|id| session.delete_anchor_point(id).is_ok())
        }
        Command::Toggle(i) => {
            anchor_at(session, i).is_some_and(|id| session.toggle_point_type(id).is_ok())
        }
        Command::Nudge { dx, dy, shift } => session.nudge_selected(dx, dy, shift).is_ok(),
    }
}

fn anchor_at<C: Canvas>(session: &EditSession<C>, index: usize) -> Option<EntityId> {
    let id = session
        .path()
        .and_then(|path| path.points().ids().get(index).copied());
    if id.is_none() {
        tracing::warn!("No anchor at index {}", index);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::SceneCanvas;
    use crate::path::{Anchor, BezierPath, PointType, WorldPoint};

    fn session_with_path() -> EditSession<SceneCanvas> {
        let path = BezierPath::new(vec![
            Anchor::new(WorldPoint(Point::new(0.0, 0.0)), PointType::Corner)
                .with_controls(None, Some(WorldPoint(Point::new(10.0, 0.0)))),
            Anchor::new(WorldPoint(Point::new(30.0, 0.0)), PointType::Corner)
                .with_controls(Some(WorldPoint(Point::new(20.0, 0.0))), None),
        ])
        .unwrap();
        let mut session = EditSession::new(SceneCanvas::new());
        session.activate(path);
        session
    }

    #[test]
    fn parses_every_command() {
        let script = "
            # set up
            transform 1 0 0 1 5 -5
            select 0
            deselect
            hover 1.5 2
            drag-anchor 1 40 0   # trailing comment
            drag-control 0 cp2 12 3
            click 15 0
            delete 1
            toggle 0
            nudge 1 0
            nudge 0 -1 shift
        ";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 11);
        assert_eq!(
            commands[0],
            Command::Transform(Affine::new([1.0, 0.0, 0.0, 1.0, 5.0, -5.0]))
        );
        assert_eq!(
            commands[5],
            Command::DragControl(0, ControlSide::Out, Point::new(12.0, 3.0))
        );
        assert_eq!(
            commands[10],
            Command::Nudge {
                dx: 0.0,
                dy: -1.0,
                shift: true
            }
        );
    }

    #[test]
    fn reports_the_bad_line() {
        let err = parse_script("select 0\ndrag-control 0 cp3 1 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(parse_command("select x").is_err());
        assert!(parse_command("warp 1 2").is_err());
    }

    #[test]
    fn executes_and_counts_rejections() {
        let mut session = session_with_path();
        let commands = parse_script("click 15 0\nselect 1\nnudge 1 0\ndelete 7\nselect 9\n").unwrap();

        let report = execute(&mut session, &commands);

        assert_eq!(report, ScriptReport { applied: 3, rejected: 2 });
        let path = session.path().unwrap();
        assert_eq!(path.len(), 3);
        let ids = path.points().ids();
        assert_eq!(session.selected_anchor_id(), Some(ids[1]));
        assert_eq!(path.world_anchor(ids[1]).unwrap().point.0, Point::new(16.0, 0.0));
    }

    #[test]
    fn minimum_anchor_delete_is_rejected() {
        let mut session = session_with_path();
        let report = execute(&mut session, &[Command::Delete(0)]);
        assert_eq!(report.rejected, 1);
        assert_eq!(session.path().unwrap().len(), 2);
    }
}
