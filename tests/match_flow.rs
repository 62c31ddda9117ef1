use hand_pong::host::{FrameLoop, PresentationSink, ScriptedPerception};
use hand_pong::sim::{
    FixedServe, MatchEvent, MatchPhase, MatchState, Observation, Side, Snapshot, TickInput,
};

#[derive(Default)]
struct Recorder {
    frames: Vec<(Snapshot, Vec<MatchEvent>)>,
}

impl Recorder {
    fn first_frame_with(&self, event: MatchEvent) -> Option<usize> {
        self.frames.iter().position(|(_, events)| events.contains(&event))
    }
}

impl PresentationSink for Recorder {
    fn present(&mut self, snapshot: &Snapshot, events: &[MatchEvent]) -> std::io::Result<()> {
        self.frames.push((*snapshot, events.to_vec()));
        Ok(())
    }
}

const GESTURE: &str = r#"[{"side":"left","x":0.50,"y":0.50},{"side":"right","x":0.52,"y":0.50}]"#;
/// Right paddle settles with its top edge at 83.125
const RIGHT_HAND_HIGH: &str = r#"[{"side":"right","x":0.9,"y":0.34375}]"#;

fn script(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[test]
fn test_rally_return_and_point() {
    let mut lines = vec![GESTURE];
    lines.extend(std::iter::repeat_n(RIGHT_HAND_HIGH, 199));
    let text = script(&lines);

    let state = MatchState::new(FixedServe::new(1.0, 1.0));
    let mut frame_loop = FrameLoop::new(
        state,
        ScriptedPerception::new(text.as_bytes()),
        Recorder::default(),
    );
    let summary = frame_loop.run().unwrap();
    assert_eq!(summary.frames, 200);

    let rec = frame_loop.sink();
    assert_eq!(rec.first_frame_with(MatchEvent::Started), Some(0));
    assert_eq!(
        rec.first_frame_with(MatchEvent::PaddleHit { side: Side::Right }),
        Some(50)
    );
    assert_eq!(
        rec.first_frame_with(MatchEvent::PaddleHit { side: Side::Left }),
        None
    );

    // the return flies past the left paddle
    let scored = rec
        .first_frame_with(MatchEvent::Scored { side: Side::Right })
        .unwrap();
    assert_eq!(scored, 151);

    let (snap, _) = rec.frames[scored];
    assert_eq!(snap.phase, MatchPhase::Idle);
    assert_eq!((snap.left_score, snap.right_score), (0, 1));
    assert_eq!((snap.ball_x, snap.ball_y), (400.0, 150.0));

    // one hand is not enough to restart
    let (last, _) = rec.frames.last().unwrap();
    assert_eq!(last.phase, MatchPhase::Idle);
    assert_eq!(last.right_paddle_y, 83.125);
    assert!(!last.left_detected);
}

#[test]
fn test_unreturned_serve_scores_for_left() {
    let mut state = MatchState::new(FixedServe::new(1.0, 1.0));
    let gesture = TickInput::new(
        Some(Observation::new(0.50, 0.50)),
        Some(Observation::new(0.52, 0.50)),
    );

    let mut snap = state.tick(&gesture);
    let mut ticks = 1;
    while snap.phase == MatchPhase::Playing {
        snap = state.tick(&TickInput::default());
        ticks += 1;
        assert!(ticks < 1000, "rally never ended");
    }

    assert_eq!(ticks, 58);
    assert_eq!((snap.left_score, snap.right_score), (1, 0));
    assert_eq!(state.ball.vel.x.abs(), 7.0);
    assert_eq!(state.ball.vel.y.abs(), 7.0);

    // holding the gesture again relaunches straight away
    let snap = state.tick(&gesture);
    assert_eq!(snap.phase, MatchPhase::Playing);
}

#[test]
fn test_seeded_matches_replay_identically() {
    let frames: Vec<TickInput> = (0..600)
        .map(|i| {
            if i % 150 == 0 {
                TickInput::new(
                    Some(Observation::new(0.5, 0.5)),
                    Some(Observation::new(0.51, 0.5)),
                )
            } else {
                let y = (i as f32 * 0.05).sin() * 0.5 + 0.5;
                TickInput::new(Some(Observation::new(0.1, y)), Some(Observation::new(0.9, 1.0 - y)))
            }
        })
        .collect();

    let mut a = MatchState::with_seed(2024);
    let mut b = MatchState::with_seed(2024);
    for input in &frames {
        assert_eq!(a.tick(input), b.tick(input));
    }
}
