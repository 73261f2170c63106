//! Curated publisher and franchise tables
//!
//! Declaration order is meaningful: specific publishers come before the
//! umbrella companies that own them, and the reverse indices keep the first
//! declaring entry for any subsidiary that appears under several parents.

/// One parent publisher: lookup key, alternate keys, and `(display name,
/// catalog slug)` pairs for every subsidiary studio.
pub(super) struct PublisherRecord {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub subsidiaries: &'static [(&'static str, &'static str)],
}

pub(super) const PUBLISHERS: &[PublisherRecord] = &[
    PublisherRecord {
        key: "bethesda",
        aliases: &["zenimax"],
        subsidiaries: &[
            ("Bethesda Game Studios", "bethesda-game-studios"),
            ("Bethesda Softworks", "bethesda-softworks"),
            ("id Software", "id-software"),
            ("Arkane Studios", "arkane-studios"),
            ("MachineGames", "machinegames"),
            ("Tango Gameworks", "tango-gameworks"),
            ("ZeniMax Online Studios", "zenimax-online-studios"),
            ("Alpha Dog Games", "alpha-dog-games"),
            ("Roundhouse Studios", "roundhouse-studios"),
        ],
    },
    PublisherRecord {
        key: "rockstar",
        aliases: &["rockstar games"],
        subsidiaries: &[
            ("Rockstar Games", "rockstar-games"),
            ("Rockstar North", "rockstar-north"),
            ("Rockstar San Diego", "rockstar-san-diego"),
            ("Rockstar Leeds", "rockstar-leeds"),
            ("Rockstar Toronto", "rockstar-toronto"),
            ("Rockstar India", "rockstar-india"),
        ],
    },
    PublisherRecord {
        key: "2k",
        aliases: &["2k games"],
        subsidiaries: &[
            ("2K Games", "2k-games"),
            ("Firaxis Games", "firaxis-games"),
            ("Gearbox Software", "gearbox-software"),
            ("Hangar 13", "hangar-13"),
            ("Visual Concepts", "visual-concepts"),
            ("Cat Daddy Games", "cat-daddy-games"),
        ],
    },
    PublisherRecord {
        key: "blizzard",
        aliases: &["blizzard entertainment"],
        subsidiaries: &[
            ("Blizzard Entertainment", "blizzard-entertainment"),
            ("Blizzard Albany", "blizzard-albany"),
        ],
    },
    PublisherRecord {
        key: "activision",
        aliases: &["activision blizzard"],
        subsidiaries: &[
            ("Activision", "activision"),
            ("Infinity Ward", "infinity-ward"),
            ("Treyarch", "treyarch"),
            ("Sledgehammer Games", "sledgehammer-games"),
            ("Raven Software", "raven-software"),
            ("Toys for Bob", "toys-for-bob"),
            ("Beenox", "beenox"),
            ("High Moon Studios", "high-moon-studios"),
        ],
    },
    PublisherRecord {
        key: "electronic arts",
        aliases: &["ea", "ea games"],
        subsidiaries: &[
            ("EA Sports", "ea-sports"),
            ("BioWare", "bioware"),
            ("DICE", "dice"),
            ("Respawn Entertainment", "respawn-entertainment"),
            ("Maxis", "maxis"),
            ("Criterion Games", "criterion-games"),
            ("Codemasters", "codemasters"),
            ("Motive Studio", "motive-studio"),
            ("Full Circle", "full-circle"),
        ],
    },
    PublisherRecord {
        key: "ubisoft",
        aliases: &[],
        subsidiaries: &[
            ("Ubisoft Montreal", "ubisoft-montreal"),
            ("Ubisoft Toronto", "ubisoft-toronto"),
            ("Ubisoft Paris", "ubisoft-paris"),
            ("Ubisoft Quebec", "ubisoft-quebec"),
            ("Massive Entertainment", "massive-entertainment"),
            ("Red Storm Entertainment", "red-storm-entertainment"),
            ("Blue Byte", "blue-byte"),
        ],
    },
    PublisherRecord {
        key: "sony",
        aliases: &[
            "playstation",
            "playstation studios",
            "sony interactive entertainment",
        ],
        subsidiaries: &[
            ("Naughty Dog", "naughty-dog"),
            ("Santa Monica Studio", "santa-monica-studio"),
            ("Insomniac Games", "insomniac-games"),
            ("Guerrilla Games", "guerrilla-games"),
            ("Sucker Punch Productions", "sucker-punch-productions"),
            ("Media Molecule", "media-molecule"),
            ("Polyphony Digital", "polyphony-digital"),
            ("Bend Studio", "bend-studio"),
            ("Housemarque", "housemarque"),
            ("Bungie", "bungie"),
            ("Firesprite", "firesprite"),
        ],
    },
    PublisherRecord {
        key: "nintendo",
        aliases: &[],
        subsidiaries: &[
            ("Nintendo EPD", "nintendo-epd"),
            ("Retro Studios", "retro-studios"),
            ("Monolith Soft", "monolith-soft"),
            ("HAL Laboratory", "hal-laboratory"),
            ("Intelligent Systems", "intelligent-systems"),
            ("Game Freak", "game-freak"),
            ("Next Level Games", "next-level-games"),
        ],
    },
    PublisherRecord {
        key: "sega",
        aliases: &[],
        subsidiaries: &[
            ("Sonic Team", "sonic-team"),
            ("Ryu Ga Gotoku Studio", "ryu-ga-gotoku-studio"),
            ("Atlus", "atlus"),
            ("Creative Assembly", "creative-assembly"),
            ("Sports Interactive", "sports-interactive"),
            ("Relic Entertainment", "relic-entertainment"),
            ("Two Point Studios", "two-point-studios"),
        ],
    },
    PublisherRecord {
        key: "square enix",
        aliases: &["square", "squaresoft"],
        subsidiaries: &[
            ("Square Enix", "square-enix"),
            ("Square Enix Montreal", "square-enix-montreal"),
            ("Luminous Productions", "luminous-productions"),
            ("Tokyo RPG Factory", "tokyo-rpg-factory"),
        ],
    },
    PublisherRecord {
        key: "bandai namco",
        aliases: &["bandai", "namco"],
        subsidiaries: &[
            ("Bandai Namco Studios", "bandai-namco-studios"),
            ("Bandai Namco Entertainment", "bandai-namco-entertainment"),
        ],
    },
    PublisherRecord {
        key: "kadokawa",
        aliases: &[],
        subsidiaries: &[
            ("FromSoftware", "fromsoftware"),
            ("Spike Chunsoft", "spike-chunsoft"),
            ("Acquire", "acquire"),
        ],
    },
    PublisherRecord {
        key: "warner bros",
        aliases: &["wb games", "warner bros games"],
        subsidiaries: &[
            ("NetherRealm Studios", "netherrealm-studios"),
            ("Rocksteady Studios", "rocksteady-studios"),
            ("Monolith Productions", "monolith-productions"),
            ("Avalanche Software", "avalanche-software"),
            ("TT Games", "tt-games"),
            ("WB Games Montreal", "wb-games-montreal"),
        ],
    },
    PublisherRecord {
        key: "paradox",
        aliases: &["paradox interactive"],
        subsidiaries: &[
            ("Paradox Development Studio", "paradox-development-studio"),
            ("Paradox Tinto", "paradox-tinto"),
            ("Colossal Order", "colossal-order"),
            ("Harebrained Schemes", "harebrained-schemes"),
        ],
    },
    PublisherRecord {
        key: "embracer",
        aliases: &["embracer group"],
        subsidiaries: &[
            ("THQ Nordic", "thq-nordic"),
            ("Deep Silver", "deep-silver"),
            ("Volition", "volition"),
            ("Crystal Dynamics", "crystal-dynamics"),
            ("Eidos-Montréal", "eidos-montreal"),
            ("Saber Interactive", "saber-interactive"),
        ],
    },
    PublisherRecord {
        key: "krafton",
        aliases: &[],
        subsidiaries: &[
            ("PUBG Studios", "pubg-studios"),
            ("Striking Distance Studios", "striking-distance-studios"),
            ("Unknown Worlds", "unknown-worlds"),
            ("Bluehole Studio", "bluehole-studio"),
        ],
    },
    PublisherRecord {
        key: "epic games",
        aliases: &["epic"],
        subsidiaries: &[
            ("Epic Games", "epic-games"),
            ("Psyonix", "psyonix"),
            ("Mediatonic", "mediatonic"),
            ("Harmonix", "harmonix"),
        ],
    },
    PublisherRecord {
        key: "tencent",
        aliases: &[],
        subsidiaries: &[
            ("Riot Games", "riot-games"),
            ("TiMi Studio Group", "timi-studio-group"),
            ("LightSpeed Studios", "lightspeed-studios"),
            ("Funcom", "funcom"),
            ("Sharkmob", "sharkmob"),
        ],
    },
    PublisherRecord {
        key: "cd projekt",
        aliases: &["cd projekt red", "cdpr"],
        subsidiaries: &[
            ("CD Projekt Red", "cd-projekt-red"),
            ("The Molasses Flood", "the-molasses-flood"),
        ],
    },
    PublisherRecord {
        key: "take-two",
        aliases: &["take two", "take-two interactive"],
        subsidiaries: &[
            ("Rockstar Games", "rockstar-games"),
            ("2K Games", "2k-games"),
            ("Zynga", "zynga"),
            ("Private Division", "private-division"),
            ("Ghost Story Games", "ghost-story-games"),
        ],
    },
    // Umbrella owner of several entries above; declared last on purpose.
    PublisherRecord {
        key: "microsoft",
        aliases: &["xbox", "xbox game studios", "microsoft gaming"],
        subsidiaries: &[
            ("Xbox Game Studios", "xbox-game-studios"),
            ("Bethesda Game Studios", "bethesda-game-studios"),
            ("id Software", "id-software"),
            ("Arkane Studios", "arkane-studios"),
            ("343 Industries", "343-industries"),
            ("The Coalition", "the-coalition"),
            ("Turn 10 Studios", "turn-10-studios"),
            ("Playground Games", "playground-games"),
            ("Rare", "rare"),
            ("Ninja Theory", "ninja-theory"),
            ("Obsidian Entertainment", "obsidian-entertainment"),
            ("inXile Entertainment", "inxile-entertainment"),
            ("Double Fine Productions", "double-fine-productions"),
            ("Mojang Studios", "mojang-studios"),
            ("Compulsion Games", "compulsion-games"),
            ("Undead Labs", "undead-labs"),
            ("World's Edge", "worlds-edge"),
            ("Activision", "activision"),
        ],
    },
];

/// Well-known game series and the studios behind them.
pub(super) const FRANCHISES: &[(&str, &[(&str, &str)])] = &[
    ("elden ring", &[("FromSoftware", "fromsoftware")]),
    ("dark souls", &[("FromSoftware", "fromsoftware")]),
    ("sekiro", &[("FromSoftware", "fromsoftware")]),
    ("bloodborne", &[("FromSoftware", "fromsoftware")]),
    ("armored core", &[("FromSoftware", "fromsoftware")]),
    (
        "the elder scrolls",
        &[("Bethesda Game Studios", "bethesda-game-studios")],
    ),
    ("skyrim", &[("Bethesda Game Studios", "bethesda-game-studios")]),
    (
        "fallout",
        &[
            ("Bethesda Game Studios", "bethesda-game-studios"),
            ("Obsidian Entertainment", "obsidian-entertainment"),
        ],
    ),
    ("starfield", &[("Bethesda Game Studios", "bethesda-game-studios")]),
    ("doom", &[("id Software", "id-software")]),
    ("quake", &[("id Software", "id-software")]),
    ("wolfenstein", &[("MachineGames", "machinegames")]),
    ("dishonored", &[("Arkane Studios", "arkane-studios")]),
    ("grand theft auto", &[("Rockstar North", "rockstar-north")]),
    ("gta", &[("Rockstar North", "rockstar-north")]),
    ("red dead redemption", &[("Rockstar Games", "rockstar-games")]),
    ("civilization", &[("Firaxis Games", "firaxis-games")]),
    ("xcom", &[("Firaxis Games", "firaxis-games")]),
    ("borderlands", &[("Gearbox Software", "gearbox-software")]),
    ("bioshock", &[("Irrational Games", "irrational-games")]),
    ("mafia", &[("Hangar 13", "hangar-13")]),
    (
        "world of warcraft",
        &[("Blizzard Entertainment", "blizzard-entertainment")],
    ),
    ("warcraft", &[("Blizzard Entertainment", "blizzard-entertainment")]),
    ("diablo", &[("Blizzard Entertainment", "blizzard-entertainment")]),
    ("overwatch", &[("Blizzard Entertainment", "blizzard-entertainment")]),
    ("starcraft", &[("Blizzard Entertainment", "blizzard-entertainment")]),
    (
        "call of duty",
        &[
            ("Infinity Ward", "infinity-ward"),
            ("Treyarch", "treyarch"),
            ("Sledgehammer Games", "sledgehammer-games"),
        ],
    ),
    ("mass effect", &[("BioWare", "bioware")]),
    ("dragon age", &[("BioWare", "bioware")]),
    ("battlefield", &[("DICE", "dice")]),
    ("apex legends", &[("Respawn Entertainment", "respawn-entertainment")]),
    ("titanfall", &[("Respawn Entertainment", "respawn-entertainment")]),
    ("the sims", &[("Maxis", "maxis")]),
    (
        "assassin's creed",
        &[
            ("Ubisoft Montreal", "ubisoft-montreal"),
            ("Ubisoft Quebec", "ubisoft-quebec"),
        ],
    ),
    ("far cry", &[("Ubisoft Montreal", "ubisoft-montreal")]),
    ("the division", &[("Massive Entertainment", "massive-entertainment")]),
    ("the last of us", &[("Naughty Dog", "naughty-dog")]),
    ("uncharted", &[("Naughty Dog", "naughty-dog")]),
    ("god of war", &[("Santa Monica Studio", "santa-monica-studio")]),
    ("horizon", &[("Guerrilla Games", "guerrilla-games")]),
    (
        "ghost of tsushima",
        &[("Sucker Punch Productions", "sucker-punch-productions")],
    ),
    ("spider-man", &[("Insomniac Games", "insomniac-games")]),
    ("ratchet & clank", &[("Insomniac Games", "insomniac-games")]),
    ("gran turismo", &[("Polyphony Digital", "polyphony-digital")]),
    ("the legend of zelda", &[("Nintendo EPD", "nintendo-epd")]),
    ("zelda", &[("Nintendo EPD", "nintendo-epd")]),
    ("mario", &[("Nintendo EPD", "nintendo-epd")]),
    ("metroid", &[("Retro Studios", "retro-studios")]),
    ("pokemon", &[("Game Freak", "game-freak")]),
    ("xenoblade", &[("Monolith Soft", "monolith-soft")]),
    ("kirby", &[("HAL Laboratory", "hal-laboratory")]),
    ("fire emblem", &[("Intelligent Systems", "intelligent-systems")]),
    ("sonic", &[("Sonic Team", "sonic-team")]),
    ("yakuza", &[("Ryu Ga Gotoku Studio", "ryu-ga-gotoku-studio")]),
    ("like a dragon", &[("Ryu Ga Gotoku Studio", "ryu-ga-gotoku-studio")]),
    ("persona", &[("Atlus", "atlus")]),
    ("shin megami tensei", &[("Atlus", "atlus")]),
    ("total war", &[("Creative Assembly", "creative-assembly")]),
    ("football manager", &[("Sports Interactive", "sports-interactive")]),
    ("final fantasy", &[("Square Enix", "square-enix")]),
    ("kingdom hearts", &[("Square Enix", "square-enix")]),
    ("dragon quest", &[("Square Enix", "square-enix")]),
    ("nier", &[("PlatinumGames", "platinumgames")]),
    ("tomb raider", &[("Crystal Dynamics", "crystal-dynamics")]),
    ("deus ex", &[("Eidos-Montréal", "eidos-montreal")]),
    ("hitman", &[("IO Interactive", "io-interactive")]),
    ("tekken", &[("Bandai Namco Studios", "bandai-namco-studios")]),
    ("mortal kombat", &[("NetherRealm Studios", "netherrealm-studios")]),
    ("batman arkham", &[("Rocksteady Studios", "rocksteady-studios")]),
    ("middle-earth", &[("Monolith Productions", "monolith-productions")]),
    (
        "crusader kings",
        &[("Paradox Development Studio", "paradox-development-studio")],
    ),
    (
        "europa universalis",
        &[("Paradox Development Studio", "paradox-development-studio")],
    ),
    (
        "stellaris",
        &[("Paradox Development Studio", "paradox-development-studio")],
    ),
    (
        "hearts of iron",
        &[("Paradox Development Studio", "paradox-development-studio")],
    ),
    ("cities skylines", &[("Colossal Order", "colossal-order")]),
    ("pubg", &[("PUBG Studios", "pubg-studios")]),
    ("fortnite", &[("Epic Games", "epic-games")]),
    ("rocket league", &[("Psyonix", "psyonix")]),
    ("league of legends", &[("Riot Games", "riot-games")]),
    ("valorant", &[("Riot Games", "riot-games")]),
    ("the witcher", &[("CD Projekt Red", "cd-projekt-red")]),
    ("cyberpunk", &[("CD Projekt Red", "cd-projekt-red")]),
    (
        "halo",
        &[("343 Industries", "343-industries"), ("Bungie", "bungie")],
    ),
    ("destiny", &[("Bungie", "bungie")]),
    ("gears of war", &[("The Coalition", "the-coalition")]),
    (
        "forza",
        &[
            ("Turn 10 Studios", "turn-10-studios"),
            ("Playground Games", "playground-games"),
        ],
    ),
    ("fable", &[("Playground Games", "playground-games")]),
    ("minecraft", &[("Mojang Studios", "mojang-studios")]),
    ("sea of thieves", &[("Rare", "rare")]),
    ("hellblade", &[("Ninja Theory", "ninja-theory")]),
    (
        "pillars of eternity",
        &[("Obsidian Entertainment", "obsidian-entertainment")],
    ),
    (
        "the outer worlds",
        &[("Obsidian Entertainment", "obsidian-entertainment")],
    ),
    ("monster hunter", &[("Capcom", "capcom")]),
    ("resident evil", &[("Capcom", "capcom")]),
    ("street fighter", &[("Capcom", "capcom")]),
    ("devil may cry", &[("Capcom", "capcom")]),
    ("metal gear", &[("Konami", "konami")]),
    ("silent hill", &[("Konami", "konami")]),
    ("death stranding", &[("Kojima Productions", "kojima-productions")]),
];
