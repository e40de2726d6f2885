// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体が World に保存できる「データ部品」であることを示すマーカー。
/// `Debug` は付けておくと、ログにそのまま出せて便利！
pub trait Component: std::fmt::Debug + 'static {}
