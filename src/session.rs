use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{DotsError, DotsResult};
use crate::render::surface::{DrawSurface, FrameRGBA};
use crate::scene::{Command, Scene};

/// A command to run right before frame `frame` is drawn.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledCommand {
    /// Zero-based frame number.
    pub frame: u64,
    /// Command to execute.
    pub command: Command,
}

/// Statistics for one [`Session::run`] or [`Session::run_until_settled`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Frame number at which every dot had arrived, if that happened.
    pub settled_at: Option<u64>,
}

/// Host frame loop: owns a [`Scene`] and a surface, replays a command schedule and streams
/// frames into a [`FrameSink`].
pub struct Session {
    scene: Scene,
    surface: Box<dyn DrawSurface>,
    schedule: Vec<ScheduledCommand>,
    next_command: usize,
    frame: u64,
}

impl Session {
    /// Create a session starting at frame 0 with an empty schedule.
    pub fn new(scene: Scene, surface: Box<dyn DrawSurface>) -> Self {
        Self {
            scene,
            surface,
            schedule: Vec::new(),
            next_command: 0,
            frame: 0,
        }
    }

    /// Borrow the scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutably borrow the scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Number of the next frame to be drawn.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Queue `command` for `frame`. Commands for frames already drawn are rejected.
    ///
    /// Commands sharing a frame run in the order they were scheduled.
    pub fn schedule(&mut self, frame: u64, command: Command) -> DotsResult<()> {
        if frame < self.frame {
            return Err(DotsError::validation(format!(
                "cannot schedule a command for frame {frame}, session is at frame {}",
                self.frame
            )));
        }
        let pos = self.schedule[self.next_command..].partition_point(|c| c.frame <= frame)
            + self.next_command;
        self.schedule.insert(pos, ScheduledCommand { frame, command });
        Ok(())
    }

    /// Queue every command in `commands`.
    pub fn schedule_all(
        &mut self,
        commands: impl IntoIterator<Item = ScheduledCommand>,
    ) -> DotsResult<()> {
        for c in commands {
            self.schedule(c.frame, c.command)?;
        }
        Ok(())
    }

    /// Commands not yet executed.
    pub fn pending(&self) -> &[ScheduledCommand] {
        &self.schedule[self.next_command..]
    }

    fn run_due_commands(&mut self) -> DotsResult<()> {
        while let Some(c) = self.schedule.get(self.next_command) {
            if c.frame > self.frame {
                break;
            }
            let command = c.command.clone();
            self.next_command += 1;
            self.scene.execute(&command)?;
        }
        Ok(())
    }

    /// Run the commands and animation steps of the next `frames` frames without drawing.
    pub fn skip_frames(&mut self, frames: u64) -> DotsResult<()> {
        for _ in 0..frames {
            self.run_due_commands()?;
            self.scene.advance();
            self.frame += 1;
        }
        Ok(())
    }

    /// Execute due commands, then draw the next frame.
    pub fn render_frame(&mut self) -> DotsResult<FrameRGBA> {
        self.run_due_commands()?;
        let frame = self.scene.render_frame(self.surface.as_mut())?;
        self.frame += 1;
        Ok(frame)
    }

    /// Draw exactly `frames` frames into `sink`.
    pub fn run(&mut self, frames: u64, sink: &mut dyn FrameSink) -> DotsResult<RunStats> {
        self.run_inner(frames, false, sink)
    }

    /// Draw frames into `sink` until every dot has arrived and no commands remain, or until
    /// `max_frames` frames have been drawn.
    pub fn run_until_settled(
        &mut self,
        max_frames: u64,
        sink: &mut dyn FrameSink,
    ) -> DotsResult<RunStats> {
        self.run_inner(max_frames, true, sink)
    }

    fn run_inner(
        &mut self,
        frames: u64,
        stop_when_settled: bool,
        sink: &mut dyn FrameSink,
    ) -> DotsResult<RunStats> {
        let (width, height) = self.scene.viewport().device_size();
        sink.begin(SinkConfig { width, height })?;

        let mut stats = RunStats::default();
        for _ in 0..frames {
            let idx = self.frame;
            let frame = self.render_frame()?;
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;

            if self.scene.is_settled() {
                stats.settled_at.get_or_insert(idx);
                if stop_when_settled && self.pending().is_empty() {
                    break;
                }
            } else {
                stats.settled_at = None;
            }
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames_rendered,
            settled_at = ?stats.settled_at,
            "session run finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
