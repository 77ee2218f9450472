//! Artist lookup and cache inspection commands.

use tokio::runtime::Runtime;

use crate::config;
use crate::error::Result;
use crate::lookup::LookupError;

use super::open_cache;

/// Look up one artist and print the resolved profile
pub fn cmd_lookup(rt: &Runtime, artist: &str, refresh: bool) -> Result<()> {
    let config = config::load();
    let classifier = config.classifier();

    rt.block_on(async {
        let mut cache = open_cache(&config);

        let result = if refresh {
            cache.refresh(artist).await
        } else {
            cache.get(artist).await
        };

        match result {
            Ok(profile) => {
                println!("✓ {}", profile.name);
                if let Some(fans) = profile.fans {
                    println!("  Fans:      {fans}");
                }
                if let Some(secs) = profile.avg_track_secs {
                    println!("  Avg track: {}:{:02}", secs / 60, secs % 60);
                }
                if let Some(ref link) = profile.link {
                    println!("  Link:      {link}");
                }

                if profile.genres.is_empty() {
                    println!("  Genres:    (none reported)");
                } else {
                    println!("  Genres:    {}", profile.genres.join(", "));
                }

                let tags: Vec<String> = classifier
                    .classify(&profile.genres)
                    .iter()
                    .map(|t| t.to_string())
                    .collect();
                println!("  Tags:      {}", tags.join(", "));
            }
            Err(LookupError::NoMatches(name)) => {
                println!("✗ No artist found matching {name:?}.");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    });
    Ok(())
}

/// Show or clear the lookup cache
pub fn cmd_cache(clear: bool) -> Result<()> {
    let config = config::load();

    if clear {
        let mut cache = open_cache(&config);
        let count = cache.len();
        cache.clear();
        println!("Cleared {count} cached artist(s).");
        return Ok(());
    }

    let cache = open_cache(&config);
    if cache.is_empty() {
        println!("Lookup cache is empty.");
        return Ok(());
    }

    println!("Cached artists ({}):\n", cache.len());
    for (_, entry) in cache.entries() {
        println!(
            "  {}  [{} genre(s)]  fetched {}",
            entry.profile.name,
            entry.profile.genres.len(),
            entry.fetched_at,
        );
    }
    Ok(())
}

/// Show the effective configuration, optionally writing a default file
pub fn cmd_config(init: bool) -> Result<()> {
    let Some(path) = config::config_path() else {
        eprintln!("Error: could not determine the config directory.");
        std::process::exit(1);
    };

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            config::save(&config::Config::default())
                .map_err(|e| crate::error::Error::config(e.to_string()))?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let config = config::load();
    let presence = if path.exists() {
        ""
    } else {
        " (not present, using defaults)"
    };
    println!("Config file  : {}{presence}", path.display());
    println!("Cache file   : {}", config.cache_path().display());
    println!("History file : {}", config.history_path().display());
    println!(
        "Defaults     : {} tracks, theme {:?}",
        config.generation.default_track_count, config.generation.default_theme,
    );
    if let Some(ref url) = config.lookup.base_url {
        println!("Provider URL : {url}");
    }
    Ok(())
}
