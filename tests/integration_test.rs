use skyblock_scorer::{
    leaderboard::{LeaderboardPlayer, LeaderboardRegistry},
    models::{ScoreError, SkillStat, StatisticsSnapshot},
    scoring::{level_for, CalculationFamily, ScoreCalculator, StatRegistry},
};

fn sample_snapshot() -> StatisticsSnapshot {
    let mut snapshot = StatisticsSnapshot::default();
    snapshot.skills.mining = SkillStat::new(25, 3_500_000.0);
    snapshot.skills.farming = SkillStat::new(30, 8_100_000.0);
    snapshot.skills.runecrafting = SkillStat::new(12, 4_600.0);
    snapshot.dungeons.catacombs = SkillStat::new(24, 500_000.0);
    snapshot.dungeons.classes.healer = SkillStat::new(18, 80_000.0);
    snapshot.slayers.revenant = SkillStat::new(7, 150_000.0);
    snapshot
}

#[test]
fn test_mine_and_mining_share_general_table() {
    let registry = StatRegistry::builtin().unwrap();

    let mine = registry.resolve("mine").unwrap();
    let mining = registry.resolve("mining").unwrap();

    assert_eq!(mine.name, "Mining");
    assert_eq!(mining.name, "Mining");
    assert_eq!(mine.family, CalculationFamily::General);
    assert_eq!(mining.family, CalculationFamily::General);
}

#[test]
fn test_zero_mining_experience() {
    let calculator = ScoreCalculator::with_builtin_categories().unwrap();

    assert_eq!(level_for(0.0, CalculationFamily::General).unwrap(), 0);
    let weight = calculator.weight("mining", 0.0).unwrap();
    assert_eq!(weight.score, 0.0);
    assert_eq!(weight.overflow, 0.0);
}

#[test]
fn test_catacomb_aliases() {
    let registry = StatRegistry::builtin().unwrap();

    let names: Vec<&str> = ["cata", "catacomb", "catacombs"]
        .iter()
        .map(|alias| registry.resolve(alias).unwrap().name)
        .collect();
    assert_eq!(names, vec!["Catacomb"; 3]);

    let healer = registry.resolve("healer").unwrap();
    assert_ne!(healer.target, registry.resolve("cata").unwrap().target);
    assert_eq!(healer.family, CalculationFamily::Dungeon);
}

#[test]
fn test_mining_ties_keep_input_order() {
    let registry = LeaderboardRegistry::builtin().unwrap();
    let players: Vec<LeaderboardPlayer> = [("player1", 50.0), ("player2", 100.0), ("player3", 100.0)]
        .iter()
        .map(|(name, xp)| {
            let mut player = LeaderboardPlayer::new(*name, *name);
            player.mining_xp = *xp;
            player
        })
        .collect();

    let ranked = registry.rank("mining", players).unwrap();
    let order: Vec<&str> = ranked.iter().map(|p| p.username.as_str()).collect();

    assert_eq!(order, vec!["player2", "player3", "player1"]);
}

#[test]
fn test_runecraft_weight_is_missing_not_zero() {
    let calculator = ScoreCalculator::with_builtin_categories().unwrap();

    let error = calculator.weight("runecraft", 1_000.0).unwrap_err();
    assert!(matches!(error, ScoreError::MissingFormula(ref name) if name == "Runecrafting"));
    assert!(error.is_user_facing());
}

#[test]
fn test_overview_cannot_be_ranked() {
    let registry = LeaderboardRegistry::builtin().unwrap();

    assert!(registry.resolve("overview").is_ok());
    let error = registry.rank("overview", vec![LeaderboardPlayer::new("a", "a")]).unwrap_err();
    assert!(matches!(error, ScoreError::UnsupportedCategory { .. }));
}

#[test]
fn test_registries_are_separate_namespaces() {
    let stats = StatRegistry::builtin().unwrap();
    let leaderboards = LeaderboardRegistry::builtin().unwrap();

    // "pet" means Taming to both, "ore" only to the leaderboard
    assert_eq!(stats.resolve("pet").unwrap().name, "Taming");
    assert_eq!(leaderboards.resolve("pet").unwrap().name, "Taming");
    assert!(stats.resolve("ore").is_err());
    assert!(leaderboards.resolve("healer").is_err());
}

#[test]
fn test_full_snapshot_calculation() {
    let calculator = ScoreCalculator::with_builtin_categories().unwrap();
    let snapshot = sample_snapshot();

    let mining = calculator.calculate("mining", &snapshot).unwrap();
    assert_eq!(mining.level, 25);
    assert!(mining.weight.unwrap() > 0.0);
    assert_eq!(mining.overflow, Some(0.0));

    let rune = calculator.calculate("rune", &snapshot).unwrap();
    assert_eq!(rune.level, 12);
    assert_eq!(rune.weight, None);

    let cata = calculator.calculate("ca", &snapshot).unwrap();
    assert_eq!(cata.level, 24);
    assert!(cata.progress_level > 24.0 && cata.progress_level < 25.0);

    let total = calculator.total_weight(&snapshot).unwrap();
    assert!(total.score > mining.weight.unwrap());
}

#[test]
fn test_simulated_level_up_round_trip() {
    let calculator = ScoreCalculator::with_builtin_categories().unwrap();
    let snapshot = sample_snapshot();

    let (simulated, result) = calculator.simulate_level("healer", &snapshot, 30).unwrap();
    let healer = calculator.resolve("healer").unwrap();

    assert_eq!(healer.stat(&simulated).level, 30);
    assert_eq!(healer.stat(&simulated).experience, result.experience);
    assert_eq!(simulated.skills, snapshot.skills);
    assert_eq!(simulated.dungeons.catacombs, snapshot.dungeons.catacombs);
    assert_eq!(healer.stat(&snapshot), SkillStat::new(18, 80_000.0));
}

#[test]
fn test_leaderboard_from_snapshots() {
    let registry = LeaderboardRegistry::builtin().unwrap();
    let mut weaker = sample_snapshot();
    weaker.slayers.revenant = SkillStat::new(5, 5_000.0);

    let players = vec![
        LeaderboardPlayer::from_snapshot("uuid-weak", "Weak", &weaker).unwrap(),
        LeaderboardPlayer::from_snapshot("uuid-strong", "Strong", &sample_snapshot()).unwrap(),
    ];

    let board = registry.leaderboard("zombie", players, 10).unwrap();
    assert_eq!(board.category, "Revenant Slayer");
    assert_eq!(board.entries[0].username, "Strong");
    assert_eq!(board.entries[0].stat_value, 150_000.0);
    assert_eq!(board.entries[1].position, 2);
}
