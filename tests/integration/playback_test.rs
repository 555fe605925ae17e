//! Playback properties of the demo player

use std::io;

use finch_demo::player::{DemoPlayer, PlayerTiming, Tick};
use finch_demo::scheduler::{replay, run_to_completion, ManualClock, PlaybackResult};
use finch_demo::surface::{Node, OutputSurface, Transcript};
use finch_demo::{Event, Script};

use super::helpers::{fixtures_dir, load_fixture};

/// Surface that snapshots the open line's text after every change.
#[derive(Default)]
struct PrefixRecorder {
    inner: Transcript,
    history: Vec<String>,
}

impl PrefixRecorder {
    fn record(&mut self) {
        if let Some(text) = self.inner.open_text() {
            self.history.push(text.to_string());
        }
    }
}

impl OutputSurface for PrefixRecorder {
    fn line_break(&mut self) -> io::Result<()> {
        self.inner.line_break()
    }

    fn push_line(&mut self, text: &str, class: Option<&str>) -> io::Result<()> {
        self.inner.push_line(text, class)
    }

    fn open_line(&mut self, class: Option<&str>) -> io::Result<()> {
        self.inner.open_line(class)?;
        self.record();
        Ok(())
    }

    fn push_char(&mut self, ch: char) -> io::Result<()> {
        self.inner.push_char(ch)?;
        self.record();
        Ok(())
    }

    fn close_line(&mut self) -> io::Result<()> {
        self.inner.close_line()
    }
}

#[test]
fn blank_then_instant_scenario_renders_exactly() {
    let script = Script::load(fixtures_dir().join("scenario.json")).unwrap();
    let (transcript, elapsed) = replay(&script, PlayerTiming::default()).unwrap();

    assert_eq!(transcript.nodes().len(), 3);
    assert_eq!(transcript.nodes()[0], Node::Break);
    let line = transcript.lines().next().unwrap();
    assert_eq!(line.text, "hi");
    assert_eq!(line.classes(), "line cmd");
    assert_eq!(transcript.nodes()[2], Node::Break);
    assert_eq!(elapsed.as_millis(), 15);
}

#[test]
fn typed_line_shows_only_prefixes() {
    let script = Script::new(vec![
        Event::typed(0, "ok", None, Some(10)),
        Event::instant(0, "next", None),
    ]);
    let mut player = DemoPlayer::new(script, PlayerTiming::default());
    let mut out = PrefixRecorder::default();
    let mut clock = ManualClock::new();

    let result = run_to_completion(&mut player, &mut out, &mut clock, Default::default()).unwrap();

    assert!(matches!(result, PlaybackResult::Finished { .. }));
    assert_eq!(out.history, vec!["", "o", "ok"]);
    assert_eq!(out.inner.plain_text(), "ok\nnext\n");
}

#[test]
fn demo_question_is_typed_prefix_by_prefix() {
    let question = "> How do I handle errors in async Rust?";
    let mut player = DemoPlayer::new(Script::finch_demo(), PlayerTiming::default());
    let mut out = PrefixRecorder::default();
    let mut clock = ManualClock::new();

    run_to_completion(&mut player, &mut out, &mut clock, Default::default()).unwrap();

    assert_eq!(out.history.len(), question.chars().count() + 1);
    for window in out.history.windows(2) {
        assert!(window[1].starts_with(window[0].as_str()));
        assert_eq!(window[1].chars().count(), window[0].chars().count() + 1);
    }
    assert_eq!(out.history.last().map(String::as_str), Some(question));
}

#[test]
fn line_node_count_matches_script() {
    for script in [
        Script::finch_demo(),
        Script::load(fixtures_dir().join("scenario.json")).unwrap(),
        Script::load(fixtures_dir().join("typed.json")).unwrap(),
    ] {
        let (transcript, _) = replay(&script, PlayerTiming::default()).unwrap();
        assert_eq!(transcript.line_count(), script.expected_line_nodes());
    }
}

#[test]
fn events_render_in_script_order() {
    let script = Script::new(vec![
        Event::streamed(0, ["1a", "1b"], None),
        Event::typed(0, "2", None, None),
        Event::instant(0, "3", None),
        Event::streamed(0, ["4a"], None),
    ]);
    let (transcript, _) = replay(&script, PlayerTiming::default()).unwrap();

    let texts: Vec<&str> = transcript.lines().map(|line| line.text.as_str()).collect();
    assert_eq!(texts, ["1a", "1b", "2", "3", "4a"]);
}

#[test]
fn independent_players_render_identically() {
    let script = Script::finch_demo();
    let (first, _) = replay(&script, PlayerTiming::default()).unwrap();
    let (second, _) = replay(&script, PlayerTiming::default()).unwrap();
    let (fast, _) = replay(&script, PlayerTiming::default().with_speed(16.0)).unwrap();

    assert_eq!(first.to_markup(), second.to_markup());
    assert_eq!(first.to_markup(), fast.to_markup());
}

#[test]
fn player_steps_only_after_start() {
    let mut player = DemoPlayer::new(Script::finch_demo(), PlayerTiming::default());
    let mut out = Transcript::new();
    assert_eq!(player.step(&mut out).unwrap(), Tick::Idle);
    assert!(player.start());
    assert_eq!(player.step(&mut out).unwrap(), Tick::Wait(std::time::Duration::from_millis(600)));
}

#[test]
fn typed_fixture_markup() {
    let script = Script::from_json(&load_fixture("typed.json")).unwrap();
    let (transcript, elapsed) = replay(&script, PlayerTiming::default()).unwrap();

    assert_eq!(elapsed.as_millis(), 20 + 5 + 2 * 10 + 3 * 70);
    insta::assert_snapshot!(transcript.to_markup(), @r###"
    <span class="line cmd">$ finch</span>
    <span class="line cmd">ok</span>

    <span class="line response">Result&lt;T&gt;</span>
    <span class="line response"></span>
    <span class="line response">done</span>
    "###);
}
