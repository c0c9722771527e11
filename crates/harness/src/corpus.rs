//! Inputs of the benchmark, one per segmentation complexity class.

/// A named benchmark input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusEntry {
    pub name: &'static str,
    pub text: &'static str,
}

impl CorpusEntry {
    /// Length in UTF-8 code units
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Length of the repeated runs, in clusters
pub const LONG_RUN: usize = 1000;

const ASCII: &str = "Hello World! This is a simple ASCII string with numbers 12345 \
                     and punctuation, long enough to leave the short-input lane.";

/// ZWJ family, skin tone modifier, flag pair, emoji presentation selector and
/// single code point pictographs
const EMOJI: &str = "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}\u{200d}\u{1f466} \
                     \u{1f44b}\u{1f3fd} \u{1f1fa}\u{1f1f8} \u{2764}\u{fe0f} \
                     😀 🎉 ✨ 🚀 💻 📱";

const MIXED: &str = "Hello 👋 World 🌍! Mixed ASCII and emoji 😊 with numbers 123.";

const KOREAN: &str = "안녕하세요 세계! 한국어 문자열입니다.";

/// Decomposed accents followed by a zalgo word, four base letters carrying
/// dozens of marks each
const COMPLEX: &str = concat!(
    "Test with combining chars: e\u{301} e\u{300} e\u{302} e\u{308} ",
    "a\u{300} a\u{302} a\u{308} and zalgo ",
    "t\u{336}\u{31b}\u{317}\u{355}\u{323}\u{332}\u{359}\u{329}\u{359}\u{339}\u{318}",
    "\u{316}\u{32c}\u{317}\u{31f}\u{333}\u{320}\u{32e}\u{33b}\u{32d}\u{33e}\u{308}",
    "\u{301}\u{310}\u{35b}\u{310}\u{30c}\u{300}\u{308}\u{301}\u{300}\u{308}\u{301}",
    "\u{352}\u{308}\u{301}\u{306}\u{30e}\u{30c}\u{308}\u{1ebd}\u{338}\u{321}\u{328}",
    "\u{327}\u{33b}\u{333}\u{32e}\u{319}\u{31e}\u{323}\u{31c}\u{318}\u{319}\u{33b}",
    "\u{33b}\u{32c}\u{320}\u{320}\u{349}\u{332}\u{324}\u{359}\u{316}\u{324}\u{333}",
    "\u{317}\u{33b}\u{32c}\u{33a}\u{353}\u{349}\u{330}\u{31c}\u{32d}\u{33a}\u{353}",
    "\u{35a}\u{32a}\u{33a}\u{32a}\u{313}\u{30b}\u{30e}\u{34c}\u{30d}\u{34a}\u{309}",
    "\u{34b}\u{33d}\u{304}\u{302}\u{34b}\u{304}\u{300}\u{31a}\u{358}\u{31a}\u{35c}",
    "\u{360}\u{35d}\u{345}",
    "x\u{338}\u{322}\u{328}\u{31b}\u{354}\u{35a}\u{320}\u{31f}\u{332}\u{32a}\u{354}",
    "\u{325}\u{32e}\u{31e}\u{331}\u{353}\u{319}\u{33a}\u{329}\u{32d}\u{318}\u{35a}",
    "\u{32a}\u{348}\u{31d}\u{339}\u{32e}\u{323}\u{32d}\u{330}\u{32d}\u{316}\u{332}",
    "\u{353}\u{320}\u{323}\u{33a}\u{319}\u{331}\u{33a}\u{316}\u{355}\u{324}\u{349}",
    "\u{32e}\u{32a}\u{33c}\u{330}\u{339}\u{31e}\u{330}\u{34e}\u{300}\u{313}\u{30e}",
    "\u{33f}\u{301}\u{314}\u{302}\u{34a}\u{310}\u{33d}\u{303}\u{310}\u{311}\u{306}",
    "\u{311}\u{352}\u{312}\u{308}\u{301}\u{313}\u{34b}\u{30c}\u{309}\u{302}\u{307}",
    "\u{306}\u{30e}\u{34b}\u{301}\u{34b}\u{358}\u{31a}\u{31a}\u{358}\u{35c}\u{35c}",
    "\u{35d}\u{35d}\u{345}\u{345}",
    "t\u{335}\u{31b}\u{33b}\u{32e}\u{353}\u{331}\u{347}\u{31f}\u{347}\u{32a}\u{359}",
    "\u{329}\u{31d}\u{348}\u{33c}\u{32b}\u{32d}\u{31d}\u{332}\u{339}\u{306}\u{308}",
    "\u{301}\u{300}\u{357}\u{33f}\u{310}\u{306}\u{352}\u{304}\u{314}\u{300}\u{34c}",
    "\u{304}\u{35b}\u{312}\u{34b}\u{30b}\u{342}\u{33f}\u{30d}\u{308}\u{301}\u{307}",
    "\u{315}\u{358}\u{358}\u{35c}\u{35d}\u{35d}",
);

lazy_static! {
    static ref LONG_ASCII: String = "A".repeat(LONG_RUN);
    static ref LONG_EMOJI: String = "😀".repeat(LONG_RUN);
    static ref CORPUS: Vec<CorpusEntry> = vec![
        CorpusEntry { name: "ascii", text: ASCII },
        CorpusEntry { name: "emoji", text: EMOJI },
        CorpusEntry { name: "mixed", text: MIXED },
        CorpusEntry { name: "korean", text: KOREAN },
        CorpusEntry { name: "complex", text: COMPLEX },
        CorpusEntry { name: "longAscii", text: LONG_ASCII.as_str() },
        CorpusEntry { name: "longEmoji", text: LONG_EMOJI.as_str() },
    ];
}

/// All entries in report order
pub fn corpus() -> &'static [CorpusEntry] {
    CORPUS.as_slice()
}

pub fn find(name: &str) -> Option<&'static CorpusEntry> {
    corpus().iter().find(|entry| entry.name == name)
}
