use anyhow::Result;
use buzzword_bingo::core::bingo::generate_card;
use buzzword_bingo::core::sampler::enlarge;
use buzzword_bingo::core::BingoApi;
use buzzword_bingo::{
    BingoError, BingoService, CardLayout, LocalStorage, UsageStore, WordListDefaults,
    WordListLoader,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tempfile::TempDir;

fn service_in(dir: &Path) -> BingoService<LocalStorage, LocalStorage> {
    BingoService::new(
        WordListLoader::new(LocalStorage::new(dir.join("bingos")), WordListDefaults::default()),
        UsageStore::new(LocalStorage::new(dir), "stats.json"),
        CardLayout::default(),
    )
}

fn write_list(dir: &Path, name: &str, content: &str) -> Result<()> {
    let bingos = dir.join("bingos");
    std::fs::create_dir_all(&bingos)?;
    std::fs::write(bingos.join(format!("{}.json", name)), content)?;
    Ok(())
}

/// 兩個詞的詞表：放大到 32 後抽 25 格，計數器累加到 3
#[tokio::test]
async fn test_two_word_list_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_list(
        temp_dir.path(),
        "ab",
        r#"{"title": "T", "shout": "S", "words": ["a", "b"]}"#,
    )?;
    let service = service_in(temp_dir.path());

    assert_eq!(enlarge(&["a", "b"], 25).len(), 32);

    for _ in 0..3 {
        let page = service.card("ab").await?;
        assert_eq!(page.title, "T");
        assert_eq!(page.shout, "S");
        let cells: Vec<&String> = page.grid.iter().flatten().collect();
        assert_eq!(cells.len(), 25);
        assert!(cells.iter().all(|c| *c == "a" || *c == "b"));
    }

    let stats = service.usage().list_all().await;
    assert_eq!(stats.get("ab"), Some(&3));

    let raw = std::fs::read_to_string(temp_dir.path().join("stats.json"))?;
    let on_disk: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(on_disk, serde_json::json!({"ab": 3}));
    Ok(())
}

#[tokio::test]
async fn test_counts_survive_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_list(temp_dir.path(), "standup", r#"{"words": ["blocker", "sync"]}"#)?;

    service_in(temp_dir.path()).card("standup").await?;
    service_in(temp_dir.path()).card("standup").await?;

    let stats = service_in(temp_dir.path()).usage().list_all().await;
    assert_eq!(stats.get("standup"), Some(&2));
    Ok(())
}

#[tokio::test]
async fn test_missing_and_empty_lists() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_list(temp_dir.path(), "empty", r#"{"title": "Nothing", "words": []}"#)?;
    let service = service_in(temp_dir.path());

    assert!(matches!(
        service.card("missing").await,
        Err(BingoError::NotFound { .. })
    ));
    assert!(matches!(
        service.card("empty").await,
        Err(BingoError::EmptyWordList { .. })
    ));
    assert!(service.usage().list_all().await.is_empty());
    assert!(!temp_dir.path().join("stats.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_stats_file_is_recovered() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_list(temp_dir.path(), "agile", r#"{"words": ["velocity"]}"#)?;
    std::fs::write(temp_dir.path().join("stats.json"), "[1, 2")?;
    let service = service_in(temp_dir.path());

    assert!(service.leaderboard().await.is_empty());
    let page = service.card("agile").await?;
    assert_eq!(page.visits, 1);
    assert!(page.grid.iter().flatten().all(|c| c == "velocity"));
    Ok(())
}

#[test]
fn test_every_cell_comes_from_the_list() {
    let list = WordListDefaults::default()
        .parse(
            "cloud",
            br#"{"words": ["serverless", "k8s", "edge", "mesh", "lambda"]}"#,
        )
        .unwrap();
    let mut rng = StdRng::seed_from_u64(2024);

    for layout in [CardLayout::default(), CardLayout::new(3, 3), CardLayout::new(1, 7)] {
        let card = generate_card("cloud", &list, layout, &mut rng).unwrap();
        assert_eq!(card.cells.len(), layout.cells());
        assert!(card.cells.iter().all(|c| list.words.contains(c)));

        let grid = card.grid(layout).unwrap();
        assert_eq!(grid.len(), layout.rows);
        assert_eq!(grid[layout.rows - 1][layout.cols - 1], card.cells[layout.cells() - 1]);
    }
}
