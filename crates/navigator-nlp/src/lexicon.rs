//! Built-in English word lists for the rule engine

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our",
    "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "someone", "somebody", "anyone", "everyone", "nobody", "nothing", "something",
    "everything", "one",
];

pub(crate) const FUNCTION_WORDS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "for", "of", "in", "on", "at", "by", "to", "from",
    "with", "without", "into", "onto", "upon", "about", "above", "below", "under", "over",
    "after", "before", "during", "between", "through", "against", "within", "along",
    "beyond", "behind", "beside", "across", "around", "toward", "towards", "until", "till",
    "since", "because", "although", "though", "while", "whereas", "if", "unless", "than",
    "as", "like", "when", "where", "whether", "off", "out", "up", "down",
];

pub(crate) const VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "has", "have", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "said", "says", "say", "went", "go", "goes", "came", "come", "comes", "looked",
    "look", "looks", "seemed", "seem", "seems", "felt", "feel", "feels", "knew", "know",
    "knows", "thought", "think", "thinks", "told", "tell", "tells", "asked", "ask", "asks",
    "took", "take", "takes", "made", "make", "makes", "saw", "see", "sees", "got", "get",
    "gets", "gave", "give", "gives", "left", "leave", "called", "call", "became", "become",
    "replied", "cried", "laughed", "smiled", "whispered", "answered", "turned", "stood",
    "sat", "walked", "ran", "heard", "met", "loved", "hated", "wanted", "needed", "kept",
];

pub(crate) const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "only", "even", "still", "already", "always",
    "never", "often", "sometimes", "soon", "now", "then", "here", "there", "again", "once",
    "almost", "quite", "rather", "perhaps", "indeed", "however", "therefore", "thus",
    "away", "back", "ever", "much", "more", "most", "less", "least", "yesterday", "today",
    "tomorrow", "tonight",
];

/// Common descriptive adjectives; the suffix rules catch most of the rest
pub(crate) const ADJECTIVES: &[&str] = &[
    "able", "afraid", "alive", "alone", "angry", "anxious", "ashamed", "awful", "bad",
    "bitter", "blind", "blond", "blonde", "bold", "brave", "bright", "brilliant", "broad",
    "broken", "busy", "calm", "careful", "cheerful", "clever", "close", "cold", "cool",
    "cruel", "curious", "dark", "dead", "dear", "deep", "difficult", "dull", "eager",
    "early", "easy", "elder", "elderly", "empty", "fair", "faithful", "false", "famous",
    "fat", "fierce", "fine", "firm", "foolish", "fond", "free", "fresh", "friendly", "full",
    "funny", "gentle", "giddy", "glad", "good", "grand", "grave", "great", "greedy",
    "grim", "gruff", "guilty", "handsome", "happy", "hard", "harsh", "heavy", "high",
    "holy", "honest", "hot", "huge", "humble", "hungry", "ill", "innocent", "jealous",
    "kind", "large", "late", "lazy", "little", "lively", "lonely", "long", "loud",
    "lovely", "loyal", "mad", "mean", "meek", "merry", "mild", "modest", "many", "narrow",
    "nasty", "naughty", "neat", "nervous", "new", "nice", "noble", "odd", "old", "open",
    "other", "own", "pale", "patient", "plain", "pleasant", "polite", "poor", "pretty",
    "proud", "pure", "quick", "quiet", "rare", "ready", "real", "red", "rich", "rough",
    "rude", "sad", "safe", "same", "scared", "secret", "selfish", "serious", "severe",
    "sharp", "shy", "sick", "silent", "silly", "simple", "slender", "slim", "slow",
    "small", "smart", "soft", "solemn", "sorry", "sour", "stern", "stiff", "still",
    "strange", "strict", "strong", "stubborn", "stupid", "sure", "sweet", "tall", "tender",
    "terrible", "thick", "thin", "tired", "tough", "true", "ugly", "unhappy", "unkind",
    "upset", "vain", "warm", "weak", "weary", "wicked", "wide", "wild", "wise", "witty",
    "worried", "wrong", "young", "beautiful", "graceful", "charming", "cunning",
    "arrogant", "brilliant", "distant", "elegant", "gallant", "ignorant", "pleasant",
    "reluctant", "silent", "tolerant", "vibrant", "violent", "wealthy", "worthy",
];

/// Suffixes that mark an unknown lowercase word as an adjective
pub(crate) const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "ive", "able", "ible", "ish", "ic",
];

/// Suffixes that mark an unknown lowercase word as a noun, checked first
pub(crate) const NOUN_SUFFIXES: &[&str] = &[
    "ness", "ment", "tion", "sion", "ity", "ship", "hood", "ism", "ist", "ance", "ence",
];

/// Capitalized words that never start a person name
pub(crate) const NON_NAME_WORDS: &[&str] = &[
    "The", "A", "An", "This", "That", "These", "Those", "When", "Where", "What", "Which",
    "While", "With", "From", "Into", "Upon", "About", "After", "Before", "During", "Here",
    "There", "Then", "Thus", "Also", "Even", "Just", "Only", "Some", "Many", "Much", "Most",
    "Other", "Such", "Each", "Every", "Both", "Either", "Neither", "All", "Any", "But", "And",
    "For", "Nor", "Not", "Yet", "His", "Her", "Its", "Our", "Your", "Their", "Who", "How",
    "Why", "Yes", "No", "Oh", "Ah", "He", "She", "It", "We", "They", "You", "I", "Chapter",
    "Part", "Book", "Contents", "Epilogue", "Prologue", "God", "Heaven",
];

/// Calendar words that are capitalized but name no one
pub(crate) const CALENDAR_WORDS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "January",
    "February", "March", "April", "June", "July", "August", "September", "October",
    "November", "December", "Christmas", "Easter",
];

/// Titles that introduce a person name
pub(crate) const HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Miss", "Dr", "Sir", "Lady", "Lord", "Madame", "Mme", "Mlle",
    "Professor", "Prof", "Captain", "Capt", "Colonel", "Col", "General", "Lieutenant",
    "Sergeant", "Father", "Mother", "Sister", "Brother", "Uncle", "Aunt", "King", "Queen",
    "Prince", "Princess", "Duke", "Duchess", "Count", "Countess", "Baron", "Rev",
];

/// Final words that turn a capitalized span into a place
pub(crate) const PLACE_SUFFIXES: &[&str] = &[
    "Street", "Road", "Lane", "Avenue", "Square", "Park", "Hall", "House", "Manor", "Castle",
    "Abbey", "Church", "Bridge", "River", "Lake", "Mountain", "Hill", "Island", "City",
    "Town", "Village", "County", "Station",
];

/// Final words that turn a capitalized span into an organization
pub(crate) const ORGANIZATION_SUFFIXES: &[&str] = &[
    "Company", "Inc", "Ltd", "Corporation", "Corp", "University", "College", "School",
    "Society", "Bank", "Hospital", "Army", "Navy", "Office", "Club",
];
