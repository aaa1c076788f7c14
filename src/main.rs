use anyhow::Result;
use clap::Parser;
use playdeck::{Error, Player, Selector};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playdeck")]
#[command(about = "Flat-file playlist manager", long_about = None)]
struct Args {
    /// Path to the songs file (one `name,artist` per line)
    #[arg(short = 's', long, default_value = "songs.txt")]
    songs: PathBuf,

    /// Path to the playlists file
    #[arg(short = 'p', long, default_value = "playlists.txt")]
    playlists: PathBuf,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    log::info!("Playdeck starting up");

    let mut player = Player::load(&args.songs, &args.playlists);
    log::info!(
        "Loaded {} songs, {} playlists",
        player.list_songs().len(),
        player.list_playlists().len()
    );

    println!("playdeck - type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "help" => print_help(),
            "songs" => list_songs(&player),
            "playlists" => list_playlists(&player),
            "create" => create_playlist(&mut player, rest),
            "play" => play_playlist(&mut player, rest),
            "save" => save_playlist(&mut player, rest),
            "delete" => delete_playlist(&mut player, rest),
            "add" => add_song(&mut player, rest),
            "quit" | "exit" => break,
            _ => println!("Unknown command: {} (try `help`)", command),
        }
    }

    log::info!("Playdeck shutting down");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  songs                    list every song in the catalog");
    println!("  playlists                list every playlist");
    println!("  create <name>            create an empty playlist (not saved yet)");
    println!("  play <playlist>          play a playlist, by index or name");
    println!("  save <playlist>          save playlists to disk");
    println!("  delete <playlist>        delete a playlist (saves immediately)");
    println!("  add <playlist>,<song>    add a song to a playlist (not saved yet)");
    println!("  quit                     exit");
    println!();
    println!("Arguments are separated by commas because names may contain");
    println!("spaces; commas cannot appear in names in the file format.");
}

fn list_songs(player: &Player) {
    let songs = player.list_songs();
    if songs.is_empty() {
        println!("The catalog is empty.");
        return;
    }
    println!("Songs:");
    for (index, song) in songs.iter().enumerate() {
        println!("  {:3}  {}", index, song);
    }
}

fn list_playlists(player: &Player) {
    let playlists = player.list_playlists();
    if playlists.is_empty() {
        println!("There are no playlists.");
        return;
    }
    println!("Playlists:");
    for (index, playlist) in playlists.iter().enumerate() {
        println!("  {:3}  {} ({} songs)", index, playlist.name, playlist.len());
    }
}

fn create_playlist(player: &mut Player, name: &str) {
    if name.is_empty() {
        println!("Usage: create <name>");
        return;
    }
    match player.create_playlist(name) {
        Ok(()) => println!("Playlist \"{}\" created.", name),
        Err(e) => report(e),
    }
}

fn play_playlist(player: &mut Player, target: &str) {
    if target.is_empty() {
        println!("Usage: play <playlist>");
        return;
    }
    match player.play_playlist(&Selector::parse(target)) {
        Ok(playing) => match playing.song {
            Some(song) => println!("Playing \"{}\": {}", playing.playlist, song),
            None => println!("Playlist \"{}\" has nothing to play.", playing.playlist),
        },
        Err(e) => report(e),
    }
}

fn save_playlist(player: &mut Player, target: &str) {
    if target.is_empty() {
        println!("Usage: save <playlist>");
        return;
    }
    match player.save_playlist(&Selector::parse(target)) {
        Ok(name) => println!("Playlist \"{}\" saved.", name),
        Err(e) => report(e),
    }
}

fn delete_playlist(player: &mut Player, target: &str) {
    if target.is_empty() {
        println!("Usage: delete <playlist>");
        return;
    }
    match player.delete_playlist(&Selector::parse(target)) {
        Ok(name) => println!("Playlist \"{}\" deleted.", name),
        Err(e) => report(e),
    }
}

fn add_song(player: &mut Player, rest: &str) {
    let Some((playlist, song)) = rest.split_once(',') else {
        println!("Usage: add <playlist>,<song>");
        return;
    };
    let playlist = Selector::parse(playlist.trim());
    let song = Selector::parse(song.trim());

    match player.add_song(&playlist, &song) {
        Ok(()) => println!("Song added (use `save` to persist)."),
        Err(e) => report(e),
    }
}

/// Print a domain error for the user; I/O failures also hit the log
fn report(error: Error) {
    if let Error::Io(ref e) = error {
        log::error!("Save failed: {}", e);
    }
    println!("{}", error);
}
