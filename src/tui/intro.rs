//! Intro splash: the title in character boxes, scrambling until a key is
//! pressed, then collapsing.

use std::io::Write;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::pass::shuffle;
use crate::state::IntroState;
use crate::terminal::{Frame, GREY, RESET};

use super::TuiError;

const WORDS: [&str; 2] = ["Password", "Generator"];
const FRAME_TIME: Duration = Duration::from_millis(90);
const SHUFFLE_STEPS: usize = 12;
const HIDE_STEPS: usize = 8;

/// Frame counter for the two intro animations.
#[derive(Debug, Default)]
pub struct IntroAnimation {
    step: usize,
    hide_step: Option<usize>,
}

impl IntroAnimation {
    /// Advance one frame. Returns the name of an animation that just ended.
    pub fn advance(&mut self, intro: &IntroState) -> Option<&'static str> {
        if intro.is_intro_hidden.get() {
            let step = self.hide_step.get_or_insert(0);
            *step += 1;
            return (*step == HIDE_STEPS).then_some("hide");
        }

        self.step += 1;
        if self.step % SHUFFLE_STEPS != 0 {
            return None;
        }
        if (self.step / SHUFFLE_STEPS) % 2 == 0 {
            Some("shuffleCharsEven")
        } else {
            Some("shuffleCharsOdd")
        }
    }

    /// How many leading letters of each word have settled.
    fn settled(&self, word: &str) -> usize {
        let len = word.chars().count();
        let cycle = self.step % (SHUFFLE_STEPS * 2);
        if cycle < SHUFFLE_STEPS {
            len * cycle / SHUFFLE_STEPS
        } else {
            len
        }
    }

    pub fn render<R: Rng>(&self, rng: &mut R) -> Frame {
        let mut frame = Frame::new();
        frame.top("");
        frame.line("");

        let shrink = self.hide_step.unwrap_or(0);
        for word in WORDS {
            let settled = self.settled(word);
            let fixed: String = word.chars().take(settled).collect();
            let scrambled = shuffle(&word.chars().skip(settled).collect::<String>(), rng);
            let shown: Vec<char> = fixed.chars().chain(scrambled.chars()).collect();

            // Collapsing boxes lose one letter from the end per frame.
            let visible = shown.len().saturating_sub(shrink);
            for line in char_boxes(&shown[..visible]) {
                frame.line_center(&line);
            }
        }

        frame.line("");
        frame.line_center(&format!("{GREY}press any key{RESET}"));
        frame.bottom();
        frame
    }
}

/// ┌───┬───┐ / │ P │ a │ / └───┴───┘
fn char_boxes(chars: &[char]) -> [String; 3] {
    if chars.is_empty() {
        return [String::new(), String::new(), String::new()];
    }
    let cells = chars.len();
    let top = format!("┌{}───┐", "───┬".repeat(cells - 1));
    let mid = chars.iter().map(|c| format!("│ {c} ")).collect::<String>() + "│";
    let bottom = format!("└{}───┘", "───┴".repeat(cells - 1));
    [top, mid, bottom]
}

/// Play the intro until it closes. Returns `false` if the user quit instead.
pub fn play<W: Write, R: Rng>(out: &mut W, rng: &mut R) -> Result<bool, TuiError> {
    let intro = IntroState::new();
    let mut animation = IntroAnimation::default();

    loop {
        animation.render(rng).present(out)?;

        if event::poll(FRAME_TIME)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl_c || key.code == KeyCode::Char('q') {
                return Ok(false);
            }
            if !intro.is_intro_hidden.get() {
                intro.on_hide_intro();
            }
        }

        if let Some(name) = animation.advance(&intro)
            && intro.on_close_intro(name)
        {
            return Ok(true);
        }
    }
}
