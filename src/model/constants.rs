//! Module defining constants relevant to the data model.

use super::types::{Color, Dimensions, FontFamily};


/// Default canvas dimensions (a 16:9 banner).
pub const DEFAULT_DIMENSIONS: Dimensions = Dimensions{width: 960.0, height: 540.0};

/// Default color of the banner text.
pub const DEFAULT_FONT_COLOR: Color = Color(0xff, 0xff, 0xff);

/// Default size of the banner text.
pub const DEFAULT_FONT_SIZE: f32 = 50.0;

/// Default font family of the banner text.
pub const DEFAULT_FONT_FAMILY: FontFamily = FontFamily::EastSeaDokdo;


/// Scale-factor shortcuts offered for resizing the canvas.
pub const SCALE_PRESETS: &'static [f32] = &[0.25, 0.5, 0.75, 1.25, 1.5, 1.75, 2.0];


/// Texts offered by the "random wording" shortcut.
pub const PRESET_TEXTS: &'static [&'static str] = &[
    "독도는 우리땅",
    "Of the People, By the People, For the People",
    "당신이 포기할 때, 나는 시작한다.",
    "준비하지 않은 자는 기회가 와도 소용없다",
    "쓴 맛을 모르는 사람은 단 맛도 모른다.",
    "I never dreamed about success, I worked for it.",
    "No pain no gain.",
    "Early bird catches the worm.",
    "솔직히 내 사랑, 내 알 바 아니오.\n(Frankly, my dear, I don't give a damn.)",
    "당신의 눈동자에 건배. \n(Here's looking at you, kid.)",
    "포스가 함께하길. \n(May the Force be with you.)",
    "내일은 내일의 태양이 뜰 거야!\n (After all, tomorrow is another day!)",
    "친구는 가까이, 허나 적은 더 가까이.\n (Keep your friends close, but your enemies closer.)",
    "The die is cast. – Julius caesar",
    "Life is unfair, get used to it. – Bill Gates",
    "Stay hungry, stay foolish",
];
