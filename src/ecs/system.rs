// src/ecs/system.rs

use crate::components::board::Board;
use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// システムはゲームのロジック (ルールや振る舞い) を一つずつ担当する。
/// 配る (Deal)、勝ち判定 (WinCondition) みたいにね！
///
/// カードのデータは `World` に、山の中身は `Board` に入っているから、
/// 両方を可変参照でもらって好きに書き換えられるようにしてるよ。✏️
pub trait System {
    fn run(&mut self, world: &mut World, board: &mut Board);
}
