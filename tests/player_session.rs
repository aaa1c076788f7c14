use playdeck::{Error, Player, Selector};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write the two backing files and return their paths
fn write_files(dir: &TempDir, songs: &str, playlists: &str) -> (PathBuf, PathBuf) {
    let songs_path = dir.path().join("songs.txt");
    let playlists_path = dir.path().join("playlists.txt");
    fs::write(&songs_path, songs).unwrap();
    fs::write(&playlists_path, playlists).unwrap();
    (songs_path, playlists_path)
}

#[test]
fn test_create_add_save_produces_expected_file() {
    let dir = TempDir::new().unwrap();
    let (songs_path, playlists_path) = write_files(&dir, "Alpha,ArtistA\nBeta,ArtistB\n", "");

    let mut player = Player::load(&songs_path, &playlists_path);

    // Catalog order preserved
    let names: Vec<&str> = player.list_songs().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);

    player.create_playlist("Mix").unwrap();
    player
        .add_song(&Selector::Name("Mix".into()), &Selector::Name("Alpha".into()))
        .unwrap();
    player.save_playlist(&Selector::Name("Mix".into())).unwrap();

    let contents = fs::read_to_string(&playlists_path).unwrap();
    assert!(
        contents.starts_with("Mix,Alpha,"),
        "unexpected playlists file: {:?}",
        contents
    );
}

#[test]
fn test_delete_on_empty_collection_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let (songs_path, playlists_path) = write_files(&dir, "", "");

    let mut player = Player::load(&songs_path, &playlists_path);

    let err = player.delete_playlist(&Selector::Index(0)).unwrap_err();
    assert!(matches!(err, Error::PlaylistIndex(0)));
    assert!(player.list_playlists().is_empty());
}

#[test]
fn test_delete_persists_and_removes_exactly_one() {
    let dir = TempDir::new().unwrap();
    let (songs_path, playlists_path) = write_files(
        &dir,
        "Alpha,ArtistA\nBeta,ArtistB\n",
        "Mix,Alpha,\nChill,Beta,\n",
    );

    let mut player = Player::load(&songs_path, &playlists_path);
    assert_eq!(player.list_playlists().len(), 2);

    let name = player.delete_playlist(&Selector::Name("Mix".into())).unwrap();
    assert_eq!(name, "Mix");
    assert_eq!(player.list_playlists().len(), 1);

    // Deletion persists without an explicit save
    let reloaded = Player::load(&songs_path, &playlists_path);
    assert_eq!(reloaded.list_playlists().len(), 1);
    assert_eq!(reloaded.list_playlists()[0].name, "Chill");
}

#[test]
fn test_save_is_always_a_full_persist() {
    let dir = TempDir::new().unwrap();
    let (songs_path, playlists_path) = write_files(
        &dir,
        "Alpha,ArtistA\nBeta,ArtistB\n",
        "Mix,Alpha,\nChill,Beta,\n",
    );

    let mut player = Player::load(&songs_path, &playlists_path);

    // Saving either playlist rewrites the whole file identically
    player.save_playlist(&Selector::Name("Mix".into())).unwrap();
    let after_mix = fs::read(&playlists_path).unwrap();
    player.save_playlist(&Selector::Name("Chill".into())).unwrap();
    let after_chill = fs::read(&playlists_path).unwrap();

    assert_eq!(after_mix, after_chill);
}

#[test]
fn test_unresolved_song_names_survive_a_save() {
    let dir = TempDir::new().unwrap();
    let (songs_path, playlists_path) =
        write_files(&dir, "Alpha,ArtistA\n", "Mix,Alpha,Vanished,\n");

    let mut player = Player::load(&songs_path, &playlists_path);
    player.save_playlist(&Selector::Index(0)).unwrap();

    let contents = fs::read_to_string(&playlists_path).unwrap();
    assert_eq!(contents, "Mix,Alpha,Vanished,\n");
}

#[test]
fn test_play_then_delete_current_clears_playback() {
    let dir = TempDir::new().unwrap();
    let (songs_path, playlists_path) =
        write_files(&dir, "Alpha,ArtistA\n", "Mix,Alpha,\n");

    let mut player = Player::load(&songs_path, &playlists_path);

    let playing = player.play_playlist(&Selector::Index(0)).unwrap();
    assert_eq!(playing.song.unwrap().name, "Alpha");
    assert!(player.now_playing().is_some());

    player.delete_playlist(&Selector::Index(0)).unwrap();
    assert!(player.now_playing().is_none());
}

#[test]
fn test_missing_files_start_empty_and_recover_on_save() {
    let dir = TempDir::new().unwrap();
    let songs_path = dir.path().join("no-songs.txt");
    let playlists_path = dir.path().join("no-playlists.txt");

    // Neither file exists; loading degrades to empty collections
    let mut player = Player::load(&songs_path, &playlists_path);
    assert!(player.list_songs().is_empty());
    assert!(player.list_playlists().is_empty());

    // Saving a created playlist brings the playlists file into existence
    player.create_playlist("Fresh").unwrap();
    player.save_playlist(&Selector::Name("Fresh".into())).unwrap();

    let contents = fs::read_to_string(&playlists_path).unwrap();
    assert_eq!(contents, "Fresh,\n");
}
