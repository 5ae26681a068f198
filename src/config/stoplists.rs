//! Built-in default word lists for the rule set.
//!
//! These are data, not algorithm: [`super::RuleSet::default`] loads them, and
//! callers can replace any list wholesale via `RuleSet::from_json`. The
//! defaults were tuned on food/venue review corpora.

/// Generic, vague, or non-reviewable nouns rejected as aspects when they are
/// the entire normalized form.
pub(crate) const FILLER_TERMS: &[&str] = &[
    // meta / pronouns / generic
    "thing", "things", "bit", "lot", "way", "ways", "part", "sort", "while", "time", "times",
    "day", "days", "night", "week", "weeks", "character", "regards", "eye", "eyes", "note",
    "question", "questions", "improvement", "area", "room", "kind", "road", "hiking", "amazing",
    "long lines", "food", "attraction", "real attraction", "sugar", "cream", "country cream",
    "selection", "piece", "heaven", "cow dung", "parlors", "neighboring ice cream parlors",
    "entire life", "life", "serve", "favorite places", "tables", "cookie", "nice treat",
    "far side", "favorite", "shake", "fall", "special", "sweetness",
    // people / relationships (staff and service stay reviewable)
    "husband", "wife", "son", "daughter", "girl", "girls", "girlfriend", "friends", "manager",
    "owner", "people", "everyone", "he", "she", "buddies", "customer", "customers", "us",
    "folks", "brother", "sister", "law", "sister-in-law", "lady", "young lady", "valentine",
    "gentlemen", "locals",
    // geographic locations, not venue aspects
    "urbana", "monticello", "westville", "cu area", "town", "barn", "dairy", "sages", "sidney",
    "champaign", "fields", "corn fields", "phx", "tempe", "chandler", "valley", "az", "walmart",
    "google", "instagram", "joe", "st joe", "bay", "plaza", "complex", "pokitrition", "culvers",
    "firehouse subs", "dq", "arizona", "chandler location", "neighborhood", "strip mall",
    "japan",
    // temporal / abstract
    "tolerance", "season", "years", "minutes", "mins", "sweetness tolerance",
    "fall season special", "same ownership", "ownership", "those years", "summer", "afternoon",
    "month", "business hours", "hours", "year round", "ago", "second time", "first time",
    // bare fragments, not food items
    "ice", "cone", "cones", "swirl", "aftertaste", "place",
    // meta / digital
    "line", "lines", "entire line", "product", "menu item", "facebook", "page", "business",
    "franchises", "factory", "drive", "trip", "journey", "excursions", "trips", "hiking trip",
    "road trip", "stop", "visit", "visits",
    // personal items
    "stomach", "ache", "home", "experience", "experiences", "problem", "myself", "jeans", "car",
    "review", "reviews", "tongue", "tooth", "sweet tooth", "mind", "hair", "socks", "date",
    "cravings", "priority",
    // competitors / brands
    "baskin robbins", "jarlings", "custard cup", "rewind", "blizzard", "dripps", "bike club",
    "year", "round", "evening ice cream cycling excursions", "club",
    // additional context words
    "places", "wait", "waiting", "any time", "tornado", "tornadoes", "update", "stars", "star",
    "ps", "explanation", "check", "cash", "dusk", "speed", "light", "minute", "joint", "joints",
    "routine", "detail", "details", "surprise", "establishment", "tip", "pro tip", "highlights",
    "lowlights", "neon sign", "wall", "grass wall", "effect", "swirling effect", "bowl", "lid",
    "slices", "volleyball", "dinner", "refreshment", "cereal", "cereals", "real deal", "spot",
    "spots", "pace", "handout", "timing", "concept", "concepts", "beauty", "skin", "sugar rush",
    "stuff", "lightbulb", "money", "opinions", "opinion", "plethora", "concoctions",
    "combinations", "word", "words", "training", "least", "heat", "covid", "covid19", "masks",
    "mask", "top", "balance", "hint", "hints", "undertone", "kick", "point", "plus point",
    "chewiness", "richness", "craving", "traffic", "foot traffic", "list", "menu", "menus",
    "tubs", "refunds", "refund policy", "policy", "artisanal varieties", "picky sticks",
    "colors", "color", "photos", "pictures", "picture", "default", "rest", "fan", "fans",
    "cartoons", "saturday morning", "big bowl", "news", "article", "brownie bites", "person",
    "energy", "setting", "inside", "mix in", "mix ins", "pieces", "base", "cooking",
    "situation", "disinfectants", "environment", "substitutes", "sushi burrito",
    "almond slices", "teddy grahams", "shop", "shops", "counter", "window", "picnic tables",
    "joy", "pride", "gems", "bomb", "miss", "deal", "complaint", "complaints", "critique",
    "sign", "bite", "bites", "cup", "cups", "quart", "cashier", "bobarista", "worker",
    "workers", "order", "orders", "attention", "sweets", "items", "yum", "overrun", "sample",
    "samples", "hot day", "humid night", "cold day", "weekday", "valentines day", "weekend",
    "firsts", "online order form", "app", "website", "grocery pickup", "news article", "bread",
    "sliced bread", "custard", "world", "establishments", "employees", "employee",
    "staff members",
];

/// Ingredient names that are not reviewable flavor aspects when standalone.
pub(crate) const INGREDIENT_TERMS: &[&str] = &[
    "bananas", "banana", "graham", "crackers", "graham crackers", "pecans", "peanuts",
    "chocolate", "cookie dough", "vanilla", "milk", "dough", "splenda", "aftertaste",
    "gummy bears", "pocky sticks", "shavings", "chocolate shavings", "puree", "blueberry puree",
    "sherbet", "creamsicle", "frosted flakes", "reeses", "reeses puff", "peanut butter",
    "ginger", "lemon", "lemons", "honey", "caramel", "peach", "lychee", "strawberry",
    "strawberries", "matcha", "coconut", "aloe vera", "jasmine", "hojicha",
    "captain crunch berries", "apple jacks", "cinnamon toast", "fruity pebbles", "pineapple",
    "crush", "crystal boba", "black boba", "cookies", "cream",
];

/// Possessive/demonstrative/quantifier prefixes that mark a personal phrase.
pub(crate) const PERSONAL_PREFIXES: &[&str] = &[
    "my ", "our ", "your ", "his ", "her ", "this ", "these ", "those ", "what's ", "their ",
    "every ", "one of", "i'm ",
];

/// Substrings whose presence anywhere in the normalized form rejects it.
pub(crate) const PROBLEMATIC_SUBSTRINGS: &[&str] = &[
    "tolerance", "husband", "wife", "girl", "regards", "myself", "review", "haha", "google",
    "star", "defo", "hmm", "us", "complaint", "critique", "hair", "brother", "sister", "law",
    "s/o", "pickup", "article", "girlfriend", "valentine", "socks", "neighborhood",
];

/// Comparative-reference markers.
pub(crate) const COMPARATIVE_MARKERS: &[&str] = &["far better", "much better", "neighboring"];

/// Temporal/seasonal/degree prefixes rejected by the validator.
pub(crate) const TEMPORAL_DEGREE_PREFIXES: &[&str] = &[
    "fall ", "season ", "special ", "rotating ", "featured ", "pro ", "same ", "bit ",
    "kind of", "only ", "lot of", "much ", "more ", "hard ", "soft ", "other ", "both ",
    "hand made", "second ", "first ",
];

/// Proper nouns (places, brands) that are never aspects.
pub(crate) const PROPER_NOUN_BLACKLIST: &[&str] = &[
    "urbana", "monticello", "westville", "barn", "dairy", "facebook", "baskin", "robbins",
    "sages", "sidney", "champaign", "jarlings", "walmart", "rewind", "instagram", "tempe",
    "chandler", "phx", "google", "pokitrition", "culvers", "firehouse", "dq", "bay", "az",
    "covid", "arizona", "dripps", "japan", "covid19", "champaign urbana", "champaign-urbana",
];

/// Collective-role aspects that must never be absorbed into a coordination.
pub(crate) const COLLECTIVE_ROLES: &[&str] = &["service", "staff", "crew", "team", "employees"];

/// Leading adjectives/intensifiers/determiners stripped iteratively by the
/// normalizer (stage 3). Multiword entries are matched longest-first.
pub(crate) const LEADING_MODIFIERS: &[&str] = &[
    "great", "fun", "nice", "good", "amazing", "awesome", "little", "best", "delicious",
    "wonderful", "superb", "fattier", "cute", "plain", "simple", "ample", "basic", "strange",
    "near", "constant", "long", "fresh", "truly", "made", "some", "this", "these", "those",
    "same", "many", "about", "any", "entire", "every", "home", "typical", "traditional",
    "american", "private", "outdoor", "festive", "picture", "perfect", "trendy",
    "layered", "exceptionally", "insanely", "pretty", "real", "female", "male", "biggest",
    "massive", "flat out", "super", "double", "regular", "original", "yummy", "sounding",
    "looking", "delicate", "lightly", "cool", "bit", "various", "only", "tiny", "plus",
    "surprising", "surprisingly", "popular", "easy", "limited", "new", "chewy", "polite",
    "expressive", "subtle", "distinct", "earthy", "speedy", "friendly", "wide", "affordable",
    "fantastic", "impressed", "whole", "aromatic", "buggy", "slow", "tasty", "overall",
    "decent", "quick", "young", "fabulous", "hand", "dense", "creamy", "sweet", "quickly",
    "big", "ol",
];

/// Leading articles (stage 4).
pub(crate) const ARTICLES: &[&str] = &["a", "an", "the"];

/// Leading possessives/pronouns/quantifiers (stage 5).
pub(crate) const POSSESSIVES: &[&str] =
    &["my", "their", "our", "your", "his", "her", "its", "one of"];

/// Intensifiers that pair with a sentiment adjective for two-token removal
/// (stage 6, first pass).
pub(crate) const PAIRED_INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "super", "quite", "extremely", "too", "way", "pretty", "a bit",
    "a little", "kind of", "lot of",
];

/// Sentiment adjectives removable after a paired intensifier.
pub(crate) const SENTIMENT_ADJECTIVES: &[&str] = &[
    "good", "bad", "tasty", "nice", "sweet", "delicious", "friendly", "artificial", "cute",
    "clean", "watery", "rude", "polite", "fast",
];

/// Single leading intensifiers (stage 6, second pass).
pub(crate) const SINGLE_INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "super", "quite", "extremely", "too", "way", "pretty", "a bit",
    "a little", "kind of", "even though", "lot of", "much", "more", "absolutely", "both",
    "always",
];

/// Leading temporal/seasonal descriptors (stage 7).
pub(crate) const TEMPORAL_DESCRIPTORS: &[&str] = &[
    "fall", "season", "special", "featured", "rotating", "near", "constant", "late", "night",
];

/// Leading size/category prefixes (stage 8).
pub(crate) const SIZE_CATEGORY_PREFIXES: &[&str] = &[
    "small town", "small", "ice cream", "bubble tea", "sweet tea", "foot",
];

/// Phrases protected from stage-8 stripping when they are the whole aspect.
pub(crate) const PROTECTED_PHRASES: &[&str] =
    &["small town", "ice cream", "bubble tea", "sweet tea"];

/// Known business-name phrases (stage 9).
pub(crate) const BUSINESS_NAMES: &[&str] =
    &["sidney dairy barn", "dairy barn", "rewind", "dripps"];

/// Corporate/origin descriptors guarded by a trailing "place" (stage 10).
pub(crate) const ORIGIN_DESCRIPTORS: &[&str] = &["corporate", "local", "locally"];

/// Production descriptors stripped unconditionally (stage 10).
pub(crate) const PRODUCTION_DESCRIPTORS: &[&str] = &[
    "vegan", "non vegan", "fresh", "artisanal", "hard scoop", "hand made",
];

/// Price/channel descriptors (stage 11).
pub(crate) const PRICE_CHANNEL_PREFIXES: &[&str] =
    &["1970s", "cheap", "expensive", "pricier", "online"];

/// Generic aspect terms skipped when mentioned only in passing.
pub(crate) const GENERIC_ASPECT_TERMS: &[&str] = &[
    "ice cream", "soft serve", "bubble tea", "boba", "chocolate ice cream", "vanilla ice cream",
];

/// Tokens that mark a passing mention when they precede a generic term.
pub(crate) const PASSING_MENTION_WORDS: &[&str] = &["of", "about"];

/// Size/quality modifiers eligible for candidate expansion.
pub(crate) const SIZE_MODIFIERS: &[&str] = &[
    "large", "small", "medium", "big", "huge", "mini", "hot", "cold", "frozen", "fresh",
    "iced", "size", "regular", "grande", "venti",
];

/// Surface forms that signal negation.
pub(crate) const NEGATION_WORDS: &[&str] = &["no", "not", "n't", "never", "none"];

/// Numeric/time/price/unit expressions rejected by the validator.
pub(crate) const NUMERIC_PATTERN: &str =
    r"(\d+\s*(minute|hour|day|mile|star|dollar|\$|%|ft|weeks?)|1970s|50%|75%|25%|30mins)";

/// "-like taste" style phrases rejected by the validator.
pub(crate) const LIKE_SUFFIX_PATTERN: &str = r"\w+-like\s+(aftertaste|taste|flavor)";
