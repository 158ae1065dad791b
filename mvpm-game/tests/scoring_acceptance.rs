use mvpm_game::scenario::Story;
use mvpm_game::scoring::sprint::{SPRINT_DAYS, SprintScoringCfg, SprintSim};
use mvpm_game::scoring::{ResponseScoringCfg, score_response, score_sprint};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SAMPLE_SIZE: usize = 5000;
const TOLERANCE: f64 = 0.01;

fn risky_story(risk: f32) -> Story {
    Story {
        id: 1,
        title: String::from("Refactor legacy reporting module"),
        points: 10,
        risk,
    }
}

#[test]
fn per_day_slip_rate_tracks_risk_over_sprint_days() {
    let cfg = SprintScoringCfg::default();
    let mut rng = ChaCha20Rng::seed_from_u64(0xACED);
    let risk = 0.5_f32;

    let mut day_checks = 0_usize;
    let mut slips = 0_usize;
    for _ in 0..SAMPLE_SIZE {
        let mut sim = SprintSim::new(vec![risky_story(risk)], Vec::new(), &cfg);
        while !sim.is_complete() {
            let digest = sim.choose(0, &mut rng).expect("quiet day resolves");
            day_checks += 1;
            slips += digest.stories_slipped as usize;
        }
    }

    let expected = f64::from(risk) / f64::from(SPRINT_DAYS);
    let observed = slips as f64 / day_checks as f64;
    assert!(
        (observed - expected).abs() <= TOLERANCE,
        "slip rate drifted: observed {observed:.4}, expected {expected:.4}"
    );
}

#[test]
fn riskless_sprint_with_full_gauges_delivers_everything() {
    let cfg = SprintScoringCfg::default();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut sim = SprintSim::new(vec![risky_story(0.0)], Vec::new(), &cfg);
    while !sim.is_complete() {
        // Quiet-day filler nudges the gauges up, never down.
        sim.choose(0, &mut rng).expect("quiet day resolves");
    }
    let report = sim.report();
    assert!((report.delivery_ratio - 1.0).abs() < 1e-4);
    assert!((report.morale - 100.0).abs() < f32::EPSILON);

    let outcome = score_sprint(&cfg, &sim, false);
    assert!((outcome.score - 100.0).abs() < f32::EPSILON);
}

#[test]
fn sprint_score_never_leaves_its_band() {
    let cfg = SprintScoringCfg::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for round in 0..200 {
        let risk = (round % 10) as f32 / 10.0;
        let mut sim = SprintSim::new(vec![risky_story(risk)], Vec::new(), &cfg);
        while !sim.is_complete() {
            sim.choose(0, &mut rng).expect("quiet day resolves");
        }
        let outcome = score_sprint(&cfg, &sim, false);
        assert!((0.0..=100.0).contains(&outcome.score));
    }
}

// Purity sweep: the response scorer must agree with itself across a corpus
// of inputs, including unicode and pathological whitespace.
#[test]
fn response_scoring_is_deterministic_across_a_corpus() {
    let cfg = ResponseScoringCfg::default();
    let corpus = [
        "",
        "   ",
        "ship it",
        "Show the KPI data, propose an alternative, and acknowledge the team's concern.",
        "datadatadata % metric kpi",
        "Je comprends l'équipe: les données montrent 23% de baisse.",
        "word \t word\nword word word word word word word word word",
    ];
    for text in corpus {
        let first = score_response(&cfg, text, false);
        let second = score_response(&cfg, text, false);
        assert_eq!(first, second, "nondeterministic for {text:?}");
        assert!(first.score >= cfg.base_score);
        assert!(first.score <= cfg.max_score());
    }
}
