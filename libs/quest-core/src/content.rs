//! Built-in study content: the engineering vocabulary set, example
//! sentences for Easy sessions, and bite-sized grammar tips.

/// Engineering vocabulary (term, translation). The first entries seed a new profile.
pub const DEFAULT_VOCABULARY: &[(&str, &str)] = &[
    ("robot", "ロボット"),
    ("sensor", "センサー"),
    ("motor", "モーター"),
    ("battery", "バッテリー"),
    ("signal", "信号"),
    ("power", "電源"),
    ("voltage", "電圧"),
    ("current", "電流"),
    ("circuit", "回路"),
    ("resistor", "抵抗"),
    ("capacitor", "コンデンサ"),
    ("transistor", "トランジスタ"),
    ("logic", "論理"),
    ("gate", "ゲート"),
    ("memory", "メモリ"),
    ("program", "プログラム"),
    ("control", "制御する"),
    ("measure", "測定する"),
    ("build", "作る"),
    ("design", "設計する"),
];

/// Short example sentence with its translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    pub text: &'static str,
    pub translation: &'static str,
}

pub const SENTENCES: &[Sentence] = &[
    Sentence {
        text: "I like robots.",
        translation: "私はロボットが好きです。",
    },
    Sentence {
        text: "He builds a circuit.",
        translation: "彼は回路を作ります。",
    },
    Sentence {
        text: "She uses a sensor.",
        translation: "彼女はセンサーを使います。",
    },
    Sentence {
        text: "We study every day.",
        translation: "私たちは毎日勉強します。",
    },
    Sentence {
        text: "This is my motor.",
        translation: "これは私のモーターです。",
    },
];

/// One grammar point: a title, a few bullets and an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarTip {
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub example: &'static str,
    pub translation: &'static str,
}

pub const GRAMMAR_TIPS: &[GrammarTip] = &[
    GrammarTip {
        title: "be動詞＝イコール",
        points: &[
            "I am / He is / You are",
            "否定は not",
            "まず『〜です』を言えるだけで強い",
        ],
        example: "I am a student.",
        translation: "私は学生です。",
    },
    GrammarTip {
        title: "一般動詞＝動作",
        points: &[
            "like/play/study など",
            "He likes（sが付く）",
            "否定：don't / doesn't",
        ],
        example: "He studies every day.",
        translation: "彼は毎日勉強します。",
    },
    GrammarTip {
        title: "疑問文：Do/Does",
        points: &[
            "Do you ...? で質問",
            "Does のとき動詞は原形",
            "Yes/No で答える練習が最短",
        ],
        example: "Do you like robots?",
        translation: "ロボットが好きですか？",
    },
    GrammarTip {
        title: "過去：昨日の話",
        points: &[
            "play→played",
            "be は was/were",
            "『昨日〜した』が言えたら勝ち",
        ],
        example: "I played yesterday.",
        translation: "私は昨日プレイしました。",
    },
];

/// Grammar tip at `index`, cycling through the list.
pub fn grammar_tip(index: usize) -> &'static GrammarTip {
    &GRAMMAR_TIPS[index % GRAMMAR_TIPS.len()]
}
