//! Built-in stop-word tables.
//!
//! Lowercase, deduplicated and sorted. Multi-word entries never match a
//! single sanitized term.

/// English stop words, active by default.
pub const ENGLISH: &[&str] = &[
    "a", "a bit", "a little", "ability", "aboard", "about", "about to", "above", "abroad",
    "abruptly", "absence", "absent", "absolutely", "abstract", "academic", "academy",
    "accomplishment", "accordingly", "ache", "achievement", "acknowledge", "across", "actually",
    "additionally", "admin", "ads", "adult", "advanced", "after", "afternoon", "again",
    "against", "agency", "ago", "agreement", "ah", "ain't", "air", "aka", "alcohol",
    "algorithm", "all", "all the same", "allegedly", "almost", "along", "already", "also",
    "although", "aluminum", "always", "am", "ama", "amateur", "amazingly", "amid", "among",
    "amongst", "an", "analysis", "analytics", "analyze", "ancient", "and", "and so forth",
    "and so on", "ankle", "anon", "anonymous", "another", "answer", "anti", "any", "anybody",
    "anyhow", "anyone", "anything", "anyway", "anywhere", "ape", "apparently", "appeal",
    "appear", "apple", "applied", "approach", "appropriate", "approximately", "april",
    "archive", "are", "arent", "argument", "arm", "around", "as", "as well", "asap", "aside",
    "ask", "asked", "asking", "asks", "aspect", "assess", "assessment", "assignment", "assume",
    "assuming", "assumption", "at", "at any rate", "atop", "attempt", "attractive", "august",
    "aunt", "auth", "autumn", "available", "avatar", "away", "baby", "back", "backup",
    "backward", "bad", "bae", "baked", "ban", "banana", "banner", "barely", "bargain", "based",
    "basic", "basically", "basis", "be", "beautiful", "because", "because of", "become", "beef",
    "been", "beer", "before", "beginner", "behind", "being", "below", "beneath", "bent",
    "beside", "besides", "bet", "bete noire", "between", "betwixt", "beyond", "big", "billion",
    "bio", "bitter", "black", "block", "blog", "blood", "blue", "boiled", "boiling", "bone",
    "bookmark", "boss", "both", "bound to", "boyfriend", "brain", "brass", "bread", "brief",
    "brilliant", "bro", "bronze", "brother", "brown", "browser", "bruh", "bruise", "btw",
    "budget", "business", "but", "butter", "buying", "by", "by virtue of", "cabbage", "cache",
    "cake", "call", "called", "calling", "calls", "came", "can", "candy", "canned", "cant",
    "cap", "capsule", "captcha", "career", "carrot", "case", "cash", "certain", "certainly",
    "certificate", "chad", "challenge", "chance", "change", "chaotic", "chapter", "chart",
    "cheese", "chest", "chicken", "chiefly", "child", "chocolate", "chrome", "circle",
    "clapback", "class", "clay", "clean", "clear", "clearly", "clever", "click", "cloth",
    "cloud", "cocktail", "coffee", "cold", "colleague", "college", "come", "come what may",
    "comes", "coming", "comment", "commerce", "commitment", "commonly", "communication",
    "community", "company", "compare", "comparison", "compelled to", "complex", "complicated",
    "computer", "concept", "concern", "concerning", "concrete", "condition", "conditions",
    "conduct", "conference", "conflict", "consequence", "consequently", "consider",
    "considerable", "considering", "consist", "consistent", "constantly", "context",
    "continually", "continuously", "contract", "contrast", "conversation", "cooked", "cookie",
    "cool", "copper", "corn", "corporation", "correspond", "cost", "cotton", "could", "coulda",
    "couldnt", "countless", "coup d'etat", "coup de grace", "course", "cousin", "coworker",
    "cri de coeur", "cringe", "cure", "currency", "current", "currently", "curved", "cut",
    "cyber", "dank", "dare", "darent", "dashboard", "data", "database", "daughter", "dawn",
    "daytime", "de facto", "de jure", "deal", "debate", "december", "decline", "decrease",
    "dedication", "deep", "define", "definite", "definitely", "definition", "degree", "delete",
    "demonstrate", "denied", "deny", "depart", "department", "derive", "design", "despite",
    "dessert", "determine", "development", "device", "diamond hands", "did", "didnt", "diet",
    "different", "difficult", "dimension", "diploma", "dirt", "dirty", "discount", "discussion",
    "disease", "disorganized", "dispute", "disregarding", "distinct", "distribute",
    "distribution", "diverse", "dm", "do", "document", "does", "doesnt", "doge", "doing",
    "dollar", "domain", "done", "dont", "double", "down", "download", "downstairs", "downward",
    "drag", "dried", "drink", "drip", "drug", "dude", "due", "due to", "dumb", "during", "dusk",
    "duty", "each", "ear", "early", "earn", "earth", "east", "eastward", "easy", "eat",
    "economy", "edge", "edit", "educate", "educated", "effect", "effective", "efficiency",
    "efficient", "effort", "egg", "eight", "eighteen", "eighth", "eighty", "either", "elbow",
    "elderly", "element", "elementary", "eleven", "else", "email", "emoji", "employee",
    "employer", "encryption", "enemy", "energetic", "energy", "enfant terrible", "enforce",
    "engage", "engine", "enhance", "enormous", "ensure", "enter", "entire", "environment",
    "equal", "equally", "er", "error", "especially", "essentially", "establish", "estimate",
    "et cetera", "etc", "etcetera", "euro", "evaluate", "even", "even so", "even though",
    "evening", "event", "every", "everybody", "everyone", "everything", "everywhere", "evident",
    "evidently", "exactly", "exam", "example", "exceed", "except", "excepting", "excluding",
    "exclusively", "exercise", "exhausted", "exist", "expand", "expansion", "expect",
    "expected to", "expense", "expensive", "experience", "experienced", "experiences",
    "experiencing", "experiment", "expert", "explain", "explore", "export", "express", "extend",
    "extent", "extra", "extremely", "eye", "fabric", "face", "fact", "factor", "factory",
    "failure", "fairly", "fait accompli", "fall", "fam", "family", "fat", "father", "feature",
    "february", "feed", "feel", "feeling", "feels", "felt", "few", "fewer", "fewest", "field",
    "fifteen", "fifth", "fifty", "figure", "file", "filter", "final", "finance", "finger",
    "finna", "fire", "firefox", "firewall", "first", "fish", "fit", "five", "flat", "flex",
    "flour", "follow", "follower", "following", "fomo", "food", "foot", "for", "force majeure",
    "forced to", "form", "formal", "former", "formula", "forth", "forty", "forum", "forward",
    "foundation", "four", "fourteen", "fourth", "fr", "freezing", "frequently", "fresh", "frfr",
    "friday", "fried", "friend", "from", "frozen", "fruit", "fud", "function", "functional",
    "fundamental", "fundamentally", "further", "furthermore", "future", "fyi", "gain", "gave",
    "generalist", "generally", "generate", "get", "gets", "getting", "ghosting", "giant", "gif",
    "gift", "girlfriend", "give", "given", "gives", "giving", "glass", "gm", "gn", "go", "goal",
    "goes", "going", "going to", "gold", "gone", "gonna", "good", "got", "gotcha", "gotta",
    "gotten", "grade", "gradually", "grandfather", "grandmother", "grandparent", "granted",
    "grape", "gray", "green", "grey", "grilled", "group", "growth", "gtfo", "gucci", "guest",
    "guideline", "guidelines", "hack", "hacker", "had", "had to", "hadnt", "hafta", "hair",
    "hand", "handle", "handsome", "happen", "hard", "hardly", "has", "hashtag", "hasnt", "have",
    "have to", "havent", "having", "hbd", "he", "head", "heal", "health", "healthy", "heart",
    "heavy", "hed", "hell", "hence", "henceforth", "her", "here", "hero", "hers", "herself",
    "hes", "high", "him", "himself", "hip", "his", "history", "hmu", "hodl", "home", "homework",
    "host", "hot", "how", "however", "howsoever", "http", "https", "huge", "hundred", "hurt",
    "husband", "i", "i believe", "i expect", "i feel", "i guess", "i have to", "i hope",
    "i imagine", "i mean", "i must", "i need", "i reckon", "i should", "i suppose", "i suspect",
    "i think", "i want", "i wish", "i'd better", "i'd like", "i'd prefer", "i'd rather",
    "i've got to", "ice cream", "icy", "id", "identify", "idk", "if", "ignorant", "ill",
    "illiterate", "illness", "illustrate", "im", "imho", "immediately", "impact", "implement",
    "imply", "import", "impose", "improve", "improvement", "in", "in addition", "in any case",
    "in any event", "in either case", "in fact", "in light of", "in spite of", "in view of",
    "include", "income", "incorporate", "increase", "incredibly", "indeed", "indicate",
    "individual", "indoors", "industry", "infant", "inference", "influence", "information",
    "initial", "initiate", "injury", "innumerable", "input", "inquiry", "insert", "inside",
    "insight", "inspect", "instance", "instantly", "institute", "institution", "instruction",
    "instrument", "insurance", "integrate", "intelligence", "intend", "intense", "interact",
    "interest", "interface", "intermediate", "internal", "internet", "interpret", "interval",
    "intervene", "into", "introduce", "invest", "investigate", "investment", "involve",
    "inward", "ip", "iron", "irrespective of", "is", "isnt", "issue", "it", "item", "its",
    "itself", "ive", "iykyk", "january", "job", "journal", "juice", "july", "june", "just",
    "justification", "keyword", "kid", "kidney", "kind of", "kinda", "knee", "knowledge",
    "lack", "lacking", "large", "largely", "late", "lately", "later", "latter", "lead",
    "leader", "leadership", "learn", "learned", "least", "leather", "leave", "leaves",
    "leaving", "lecture", "left", "leg", "legal", "legislate", "less", "lesson", "lest",
    "lettuce", "level", "library", "license", "life", "lifestyle", "light", "like", "likely to",
    "limit", "linen", "link", "lip", "lit", "literate", "little", "live", "liver", "lmao",
    "locate", "location", "lock", "logic", "logical", "login", "logout", "lol", "long", "look",
    "looked", "looking", "looks", "loss", "lotsa", "lovin'", "low", "lung", "made", "made to",
    "mainly", "maintain", "major", "make", "makes", "making", "malware", "manage", "management",
    "manager", "mandate", "manual", "manufacture", "manufacturing", "many", "march", "margin",
    "mark", "market", "massive", "master", "match", "material", "matrix", "matter", "maximum",
    "may", "me", "means", "measure", "meat", "mechanism", "media", "mediate", "medicine",
    "medium", "meet", "meeting", "member", "meme", "mention", "mentor", "merely", "message",
    "messy", "metal", "method", "methodology", "metric", "metrics", "micro", "microscopic",
    "midnight", "might", "mighta", "mightnt", "migration", "mild", "military", "milk",
    "million", "mind", "mine", "miniature", "minimum", "minor", "minus", "minuscule", "mission",
    "mm-hmm", "mod", "model", "modern", "modify", "module", "modus operandi", "modus vivendi",
    "monday", "money", "monitor", "more", "moreover", "morning", "most", "mostly", "mother",
    "motivation", "mouth", "much", "multiple", "municipal", "muscle", "museum", "music", "must",
    "musta", "mustnt", "mute", "my", "myself", "nah", "narrow", "nasty", "nation", "national",
    "natural", "naturally", "nature", "near", "nearly", "neat", "neck", "need", "needed",
    "needing", "neednt", "needs", "negative", "negatively", "negotiation", "neighbor",
    "neither", "nephew", "network", "neutral", "never", "nevertheless", "new", "news", "next",
    "ngl", "ngmi", "nice", "niece", "night", "nighttime", "nine", "nineteen", "ninety", "ninth",
    "no", "no cap", "no one", "nobody", "nom de guerre", "nom de plume", "none", "nonetheless",
    "noon", "nor", "normal", "normally", "north", "northeast", "northward", "northwest", "nose",
    "not", "notable", "notably", "note", "noteworthy", "nothing", "notification", "notion",
    "notwithstanding", "novel", "november", "novice", "now", "nowhere", "nsfw", "nuclear",
    "numerous", "nutrition", "nylon", "oauth", "objective", "obligation", "observation",
    "observe", "obtain", "obvious", "obviously", "occasion", "occasionally", "occupation",
    "occur", "october", "of", "of course", "off", "offer", "office", "official", "often", "oh",
    "oil", "okay", "old", "omg", "on", "on account of", "once", "once more", "one", "onion",
    "only", "onto", "oof", "op", "opening", "operate", "operation", "operational", "opinion",
    "opportunity", "opposite", "optimal", "option", "or", "orange", "order", "orderly",
    "ordinary", "organization", "organize", "organized", "orient", "origin", "original",
    "other", "others", "ought", "ought to", "our", "ours", "ourselves", "out", "outcome",
    "outdoors", "output", "outside", "outward", "oval", "over", "overall", "overlap",
    "overseas", "owing to", "owner", "package", "page", "pain", "paper", "paper hands",
    "paragraph", "parameter", "parent", "part", "partial", "participate", "particular",
    "particularly", "partner", "passage", "passion", "passive", "password", "past", "pattern",
    "pay", "payment", "pension", "people", "pepe", "pepper", "per", "per se", "perceive",
    "percent", "perfect", "perform", "performance", "perhaps", "period", "periodt", "permit",
    "persist", "person", "personal", "perspective", "phase", "phenomenon", "philosophy",
    "phishing", "phone", "photo", "phrase", "physical", "pick", "picture", "pie", "piece",
    "piece de resistance", "pill", "pin", "pink", "pièce de résistance", "place", "plainly",
    "plan", "plane", "planning", "plastic", "playlist", "pleasant", "plot", "plus", "pm",
    "podcast", "poggers", "point", "police", "policy", "political", "politics", "polyester",
    "pool", "popular", "population", "popup", "pork", "portion", "portrait", "pose", "position",
    "positive", "possess", "possibility", "possible", "post", "potato", "potentially", "pound",
    "practical", "practically", "practice", "practitioner", "precede", "precedent", "precise",
    "precisely", "predict", "prefer", "preference", "preliminary", "premise", "premium",
    "prepare", "presence", "present", "presentation", "presently", "preserved", "president",
    "pressure", "presumably", "presume", "pretty", "previous", "price", "primarily", "primary",
    "prime", "principal", "principally", "principle", "print", "prior", "priority", "privacy",
    "private", "probably", "problem", "procedure", "proceed", "process", "produce", "product",
    "profession", "professional", "profile", "profit", "program", "progress", "project",
    "promote", "prompt", "proper", "property", "proposal", "prospect", "protect", "protocol",
    "protégé", "provided", "providing", "proxy", "psychology", "public", "publish", "purchase",
    "purely", "purple", "purpose", "pursue", "push", "quadruple", "qualification", "quality",
    "query", "question", "quickly", "quit", "quite", "quiz", "quote", "radical",
    "raison d'etre", "raison d'être", "range", "rapidly", "rarely", "rate", "rather", "ratio",
    "rational", "raw", "reach", "read", "ready", "real", "reality", "realize", "really",
    "reason", "recall", "receive", "recent", "recently", "recognition", "recommend", "record",
    "recover", "recruit", "rectangle", "red", "redpilled", "reduction", "reel", "refer",
    "reference", "reflect", "refresh", "refuse", "refused", "regarding", "regardless",
    "regardless of", "regime", "region", "register", "regular", "regularly", "regulate",
    "regulation", "reinforce", "reject", "rejected", "relate", "relation", "relationship",
    "relative", "release", "relevant", "reliability", "reliable", "relief", "religion",
    "reluctant", "remain", "remarkably", "remember", "remind", "remote", "remove", "repeat",
    "repeatedly", "replace", "reply", "report", "reportedly", "represent", "republican",
    "repulsive", "request", "require", "required to", "research", "resemble", "residence",
    "resident", "resolution", "resolve", "resource", "respond", "response", "responsibility",
    "rest", "restore", "result", "retain", "retire", "retreat", "retweet", "reveal", "revenue",
    "reverse", "review", "revise", "revolution", "reward", "rhythm", "rice", "right", "rise",
    "risk", "rizz", "roasted", "robust", "rock", "rofl", "role", "role model", "roman", "room",
    "root", "rough", "roughly", "round", "route", "routine", "row", "royal", "rubber", "rules",
    "rural", "safari", "said", "salary", "sale", "salt", "salty", "sand", "satisfy", "saturday",
    "savage", "save", "saving", "saw", "say", "saying", "says", "scale", "scan", "scarcely",
    "schedule", "scheme", "scholarly", "school", "scope", "scorching", "score", "screen",
    "script", "scroll", "search", "season", "seat", "second", "secret", "section", "sector",
    "secure", "security", "see", "seeing", "seek", "seem", "seemed", "seeming", "seemingly",
    "seems", "seen", "sees", "segment", "seize", "seldom", "select", "selection", "sell",
    "selling", "send", "senior", "sense", "sensitive", "sentence", "seo", "separate",
    "september", "sequence", "series", "serious", "serve", "server", "service", "session",
    "set", "setting", "settle", "seven", "seventeen", "seventh", "seventy", "several", "shade",
    "shadow", "shall", "shallow", "shape", "share", "sharp", "she", "shed", "sheet", "shell",
    "shes", "shift", "shine", "ship", "shop", "shopping", "short", "shorts", "shot", "should",
    "shoulda", "shoulder", "shouldnt", "show", "shrink", "sibling", "sick", "side", "sight",
    "sign", "signal", "significance", "significant", "signup", "silence", "silk", "silver",
    "similar", "simp", "simple", "simply", "simulate", "simulation", "since", "sine qua non",
    "single", "sis", "sister", "site", "situate", "six", "sixteen", "sixth", "sixty", "skill",
    "skin", "skinny", "slave", "slay", "sleep", "slide", "slight", "slightly", "slim", "slope",
    "slow", "slowly", "small", "smart", "smh", "smile", "so", "soda", "soil", "solar", "solely",
    "solid", "solution", "solve", "some", "somebody", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhat", "somewhere", "son", "song", "soon", "sophisticated",
    "sorry", "sort", "sort of", "sorta", "sound", "sour", "source", "south", "southeast",
    "southward", "southwest", "space", "spam", "speak", "special", "specialist", "species",
    "specific", "specifically", "specify", "spectrum", "spend", "spending", "spice", "spicy",
    "spin", "split", "spokesperson", "sport", "spouse", "spring", "square", "staff", "stage",
    "stake", "stale", "stan", "stand", "standard", "start", "state", "statement", "station",
    "statistical", "statistics", "stats", "status", "status quo", "steamed", "steel", "stfu",
    "stick", "sticker", "sticky", "still", "stock", "stomach", "stone", "stonks", "stop",
    "store", "storm", "story", "straight", "straightforward", "strange", "strategic",
    "strategy", "strawberry", "stream", "street", "strength", "stress", "stretch", "strike",
    "string", "strip", "stroke", "strong", "structure", "struggle", "student", "study", "stuff",
    "stupid", "style", "subject", "submit", "subscribe", "subsequent", "substance",
    "substantial", "succeed", "success", "successful", "succession", "such", "sudden",
    "suddenly", "sufficiently", "sugar", "suggest", "suitable", "summary", "summer", "sunday",
    "sunrise", "sunset", "sup", "supply", "support", "suppose", "supposed to", "supposedly",
    "supposing", "supreme", "sure", "surely", "surface", "surgeon", "surgery", "surprise",
    "surprisingly", "surround", "survey", "survive", "sus", "suspect", "suspend", "sustain",
    "swag", "sweet", "swing", "swipe", "switch", "symbol", "sympathetic", "sympathy", "sync",
    "system", "tab", "table", "tablet", "tabula rasa", "tackle", "tactic", "tag", "tail",
    "take", "taken", "takes", "taking", "talent", "talk", "tall", "tank", "tap", "tape",
    "target", "task", "taste", "tax", "tbh", "tea", "teach", "teacher", "technical",
    "technique", "technology", "teen", "teenager", "teeth", "telephone", "telescope",
    "television", "tell", "telling", "tells", "temperature", "temporary", "ten", "tend",
    "tendies", "tension", "tent", "tenth", "term", "terminate", "terms", "terra incognita",
    "terrible", "territory", "test", "testimony", "text", "texture", "tgif", "than",
    "thanks to", "that", "the", "their", "theirs", "them", "theme", "themselves", "then",
    "theoretical", "theory", "therapy", "there", "thereby", "therefore", "thereupon", "these",
    "thesis", "they", "theyd", "theyll", "theyre", "theyve", "thick", "thin", "thing", "think",
    "third", "thirteen", "thirty", "this", "thorough", "those", "though", "thought", "thousand",
    "thread", "threat", "three", "threshold", "thrice", "thrill", "throat", "through",
    "throughout", "throw", "thumb", "thursday", "thus", "ticket", "tidy", "tiger", "tight",
    "till", "time", "timeline", "tin", "tiny", "tired", "title", "tldr", "to", "toast", "today",
    "toddler", "toe", "together", "told", "tomato", "tomorrow", "tone", "tongue", "tonight",
    "too", "took", "tool", "tooth", "topic", "tornado", "total", "totally", "touch", "tough",
    "tour", "tour de force", "tourist", "toward", "towards", "tower", "town", "trace", "track",
    "trade", "traffic", "tragedy", "tragic", "trail", "train", "transfer", "transform",
    "transition", "translate", "transport", "travel", "treat", "treatment", "treaty", "tree",
    "trend", "trending", "trial", "triangle", "tribe", "tried", "tries", "trigger", "triggered",
    "trillion", "trim", "trip", "triple", "troop", "tropical", "trouble", "truck", "truly",
    "trust", "truth", "try", "trying", "tryna", "tube", "tuesday", "tune", "turn", "tutor",
    "tweet", "twelve", "twenty", "twice", "twist", "two", "type", "typical", "typically",
    "ugly", "uh", "uh-huh", "uh-uh", "ultimate", "um", "unable", "uncertain", "uncle", "under",
    "undergo", "undergraduate", "underground", "underlie", "underlying", "undermine",
    "underneath", "understand", "undertake", "uneducated", "unemployment", "unexpected",
    "unexpectedly", "unfair", "unfold", "unfollow", "unfortunately", "uniform", "unify",
    "union", "unique", "unit", "unite", "university", "unknown", "unless", "unlike", "unlikely",
    "unlock", "unnecessary", "unpack", "unpleasant", "unreasonable", "unstable", "until",
    "unto", "unusual", "unveil", "up", "update", "upgrade", "uphold", "upload", "upon", "upper",
    "upstairs", "upward", "urban", "urge", "url", "us", "usage", "use", "used", "used to",
    "useful", "user", "username", "usual", "usually", "utility", "utilize", "utmost", "utter",
    "vacant", "vacation", "vague", "valid", "valley", "valuable", "value", "van", "variable",
    "variation", "varied", "variety", "various", "vary", "vast", "vegetable", "vehicle",
    "venture", "venue", "verbal", "verification", "verify", "version", "versus", "vertical",
    "very", "vessel", "veteran", "via", "viable", "vibe", "vibes", "vibrant", "vice versa",
    "victim", "victory", "video", "view", "village", "villain", "violate", "violence",
    "violent", "viral", "virtually", "virtue", "virus", "visible", "vision", "visit", "visitor",
    "visual", "vital", "vivid", "vlog", "vocabulary", "vocal", "voice", "volume", "voluntary",
    "volunteer", "vote", "voyage", "vpn", "vulnerable", "wage", "wagmi", "waist", "wait",
    "wake", "walk", "wall", "wan", "wanna", "want", "war", "warm", "warn", "was", "wash",
    "wasnt", "waste", "watch", "water", "wave", "we", "weak", "wealth", "weapon", "wear",
    "weather", "web", "website", "wed", "wednesday", "week", "weekend", "weekly", "weigh",
    "weight", "weird", "welcome", "welfare", "well", "went", "were", "werent", "west",
    "western", "westward", "weve", "wfh", "whale", "what", "what's more", "whatever",
    "whatever happens", "whatsoever", "wheat", "wheel", "when", "whenever", "where", "whereas",
    "whereby", "wherefore", "wherein", "wherever", "whether", "which", "whichever", "while",
    "whip", "whisper", "whistle", "white", "who", "whoever", "whole", "wholesale", "whom",
    "whomever", "whomsoever", "whose", "why", "whyever", "wicked", "wide", "widely",
    "widespread", "widow", "width", "wife", "wild", "wilderness", "will", "willing", "win",
    "wind", "window", "wine", "wing", "winner", "winter", "wipe", "wire", "wisdom", "wise",
    "wish", "with", "withdraw", "within", "without", "witness", "wojak", "woke", "wolf",
    "woman", "wonder", "wont", "wood", "wooden", "wool", "word", "work", "worked", "worker",
    "workforce", "working", "workout", "works", "workshop", "world", "worried", "worry",
    "worth", "would", "woulda", "wouldnt", "wound", "wrap", "wreckage", "wrestle", "wrist",
    "write", "writer", "writing", "written", "wrong", "www", "wyd", "yard", "yass", "yeah",
    "year", "yeet", "yellow", "yen", "yep", "yes", "yesterday", "yet", "yield", "yo", "yolo",
    "you", "you know", "youd", "youll", "young", "younger", "your", "youre", "yours",
    "yourself", "yourselves", "youth", "youve", "yup", "zero", "zone",
];

/// Indonesian stop words, active after selecting `"id"`.
pub const INDONESIAN: &[&str] = &[
    "acap", "ada", "adalah", "adapun", "aduh", "agak", "agaknya", "agar", "ah", "akan",
    "akibat", "akibatnya", "aku", "alangkah", "alih-alih", "amat", "analisis", "anda", "aneka",
    "aneka ragam", "antara", "apa", "apabila", "apakah", "apalagi", "apapun", "area", "asyik",
    "atas", "atau", "awal", "ayo", "bagai macam", "bagaimana", "bagaimanakah", "bagaimanapun",
    "bagi", "bahkan", "bahwa", "banget", "banyak", "barangkali", "bawah", "beberapa",
    "beberapa kali", "beda", "begini", "begitu", "begitupun", "belakang", "beliau", "belum",
    "benar", "bener", "bentuk", "ber-", "berapa", "berbagai", "berikut", "berikutnya",
    "berkaitan", "berkali-kali", "berkenaan", "berlainan", "bermacam-macam", "bersama",
    "berturut-turut", "berulang kali", "berurutan", "besok", "betapa", "betul", "biarpun",
    "biasanya", "bila", "bilamana", "bisa", "boleh", "bukan", "cihuy", "cukup", "daerah",
    "dahulu", "dalam", "dampak", "dan", "dapat", "dari", "darimana", "daripada", "data",
    "datanglah", "deh", "demi", "dengan", "depan", "di", "dia", "dimana", "dimanakah",
    "dimanapun", "dini hari", "dll", "dong", "dsb", "dulu", "efek", "engkau", "garis besarnya",
    "gimana", "gini", "gitu", "gituan", "guna", "hal", "hampir", "hanya", "harus", "hasil",
    "hendaknya", "hingga", "ia", "ialah", "imbas", "informasi", "ingin", "ini", "intinya",
    "itu", "iya", "jadi", "jangan", "janganlah", "jelas", "jenis", "jenis-jenis", "jika",
    "jikalau", "juga", "justru", "kah", "kami", "kamu", "kan", "kapan", "kapanpun", "karena",
    "karenanya", "kayaknya", "ke", "keadaan", "kecuali", "kedelapan", "kedua", "kedudukan",
    "keempat", "keenam", "kelima", "kemana", "kemarin", "kemudian", "kenapa", "kendati",
    "kendatipun", "kepada", "kerap", "kerapkali", "kesembilan", "kesepuluh", "ketiga", "ketika",
    "ketujuh", "kira", "kira-kira", "kita", "kok", "kondisi", "kurang", "lagi", "lagi-lagi",
    "lah", "lalu", "langsun", "langsung", "lantas", "lazimnya", "lebih", "lebih-lebih", "lha",
    "lho", "lokasi", "luar", "lusa", "macam", "macam-macam", "maka", "maka dari itu", "malah",
    "malahan", "malam", "manakah", "manakala", "mantap", "mari", "masalah", "masih",
    "masing-masing", "mau", "melainkan", "melakukan", "melalui", "melihat", "memberi",
    "memberikan", "membuat", "memiliki", "memproses", "mempunyai", "mendapat", "mendapatkan",
    "mengalami", "mengambil", "mengapa", "mengaplikasikan", "mengatakan", "mengenai",
    "menggunakan", "mengimplementasikan", "mengolah", "menjadi", "menjalankan", "menuju",
    "menurut", "menyangkut", "mereka", "meski", "meskipun", "mesti", "mestinya", "metode",
    "mohon", "mula-mula", "mungkin", "nah", "namun", "nanti", "nih", "nyata", "oh",
    "oleh karena itu", "oleh sebab itu", "pada", "pada dasarnya", "pada hakikatnya",
    "pada umumnya", "padahal", "pagi", "paling", "para", "pasti", "pastilah", "pelbagai",
    "penelitian", "pengaruh", "per-", "percaya", "pergi", "pergilah", "perlu", "pernah",
    "persoalan", "pertama", "pinggir", "posisi", "proses", "pula", "pun", "rasa", "ringkasnya",
    "rupa", "saja", "sama", "sampai", "samping", "sana", "sangat", "saya", "sebab",
    "sebelumnya", "sedang", "sedangkan", "sedari", "sedikit", "segala", "seharusnya",
    "sehubungan", "sejak", "sekali", "sekali lagi", "sekalipun", "sekarang", "sekeliling",
    "sekian", "sekitar", "selain", "selama", "selanjutnya", "seluruh", "semenjak", "sementara",
    "semestinya", "semua", "sepanjang", "sepantasnya", "sepatutnya", "sepertinya", "seputar",
    "sering", "seringkali", "serta", "serupa", "sesekali", "sesuatu", "seterusnya", "setiap",
    "sewaktu", "seyogyanya", "siang", "siapa", "siapakah", "siapapun", "sih", "silakan",
    "singkatnya", "sini", "sistem", "situ", "situasi", "soal", "sore", "sudah", "sudahlah",
    "supaya", "tadi", "tadinya", "tah", "tak", "tak usah", "tanpa", "tatkala", "telah",
    "tempat", "tengah", "tengah malam", "tentang", "tentu", "tentulah", "ter-", "terakhir",
    "terdapat", "terhadap", "terjadi", "terkait", "terkecuali", "terlebih", "tersebut",
    "tetapi", "tidak", "tidak usah", "toh", "tolong", "tuh", "ujung", "umumnya", "untuk",
    "urusan", "wah", "wajib", "waktu", "walaupun", "wilayah", "wong", "wujud", "ya", "yah",
    "yaitu", "yak", "yakin", "yakni", "yang", "ybs", "yoi", "yuk",
];
