// src/components/pile.rs

use crate::components::stack::{PileType, StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

/// カードを下から順に積んでおく、種類付きの入れ物だよ📦
///
/// `cards` の最後が一番上 (top)。ルールのチェックは一切しない「ただの入れ物」で、
/// 置いていいかどうかは `logic::rules` が決める。
///
/// カードを出し入れするとき、カード側の `StackInfo` (逆参照) も一緒に更新する。
/// 逆参照を書き換えるのはこのファイルのメソッドだけ！
#[derive(Debug, Clone)]
pub struct Pile {
    stack_type: StackType,
    name: String,
    /// 描画用の重なり幅。ルールには関係ないよ。
    layout_gap: f32,
    cards: Vec<Entity>,
}

impl Pile {
    pub fn new(stack_type: StackType, layout_gap: f32) -> Self {
        Self {
            stack_type,
            name: stack_type.to_string(),
            layout_gap,
            cards: Vec::new(),
        }
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn pile_type(&self) -> PileType {
        self.stack_type.pile_type()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout_gap(&self) -> f32 {
        self.layout_gap
    }

    /// 下から上の順のカード一覧。
    pub fn cards(&self) -> &[Entity] {
        &self.cards
    }

    /// 一番上に積んで、カードの逆参照をこの山に向ける。
    pub fn add_card(&mut self, world: &mut World, card: Entity) {
        let position_in_stack = self.cards.len();
        self.cards.push(card);
        world.add_component(card, StackInfo::new(self.stack_type, position_in_stack));
    }

    /// 1 枚取り除く。上にあったカードは 1 つずつ下にずれるよ。
    /// この山に入ってなかったら `false`。
    pub fn remove_card(&mut self, world: &mut World, card: Entity) -> bool {
        let Some(index) = self.position_of(card) else {
            return false;
        };
        self.cards.remove(index);
        world.remove_component::<StackInfo>(card);
        self.reindex_from(world, index);
        true
    }

    /// `card` とその上に乗ってるカードを全部まとめて切り離す (順番はそのまま)。
    /// `card` がいなければ空の Vec。
    pub fn split_off_from(&mut self, world: &mut World, card: Entity) -> Vec<Entity> {
        let Some(index) = self.position_of(card) else {
            return Vec::new();
        };
        let detached = self.cards.split_off(index);
        for &entity in &detached {
            world.remove_component::<StackInfo>(entity);
        }
        detached
    }

    /// 全部取り除く。表裏はいじらない！
    pub fn clear(&mut self, world: &mut World) -> Vec<Entity> {
        let removed = std::mem::take(&mut self.cards);
        for &entity in &removed {
            world.remove_component::<StackInfo>(entity);
        }
        removed
    }

    /// 一番上のカード。空なら `None` (呼び出し側で空の山は特別扱いしてね)。
    pub fn top_card(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    pub fn num_of_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position_of(&self, card: Entity) -> Option<usize> {
        self.cards.iter().position(|&e| e == card)
    }

    pub fn is_top_card(&self, card: Entity) -> bool {
        self.top_card() == Some(card)
    }

    fn reindex_from(&self, world: &mut World, start: usize) {
        for (index, &entity) in self.cards.iter().enumerate().skip(start) {
            if let Some(info) = world.get_component_mut::<StackInfo>(entity) {
                info.position_in_stack = index;
            }
        }
    }
}
