//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードの大きさ、各山の置き場所、カードの重なり幅など。
//! エンジンのルールには関係なくて、描画アダプタ (`app`) が使う。

pub const CARD_WIDTH: f32 = 100.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 145.0; // カード画像の高さ

// --- 山ごとのカードの重なり幅 (Pile の layout_gap) ---
pub const STOCK_GAP: f32 = 1.0; // 山札・捨て札はほんの少しずらす
pub const FOUNDATION_GAP: f32 = 0.0; // 組札はぴったり重ねる
pub const TABLEAU_GAP: f32 = 30.0; // 場札は下のカードが見えるように

// --- 各エリアの左上座標 ---
pub const STOCK_POS_X: f32 = 95.0;
pub const STOCK_POS_Y: f32 = 20.0;

pub const DISCARD_POS_X: f32 = 285.0;
pub const DISCARD_POS_Y: f32 = 20.0;

pub const FOUNDATION_START_X: f32 = 610.0;
pub const FOUNDATION_START_Y: f32 = 20.0;
pub const FOUNDATION_X_OFFSET: f32 = 180.0; // 組札どうしの間隔

pub const TABLEAU_START_X: f32 = 95.0;
pub const TABLEAU_START_Y: f32 = 275.0;
pub const TABLEAU_X_OFFSET: f32 = 180.0; // 場札の列の間隔
