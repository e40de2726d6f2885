// src/ecs/world.rs

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// 型ごとのコンポーネント倉庫。中身は `HashMap<Entity, T>` だけど、`Box<dyn Any>` で型を隠してる。
type ComponentStorage = Box<dyn Any>;

/// ゲーム世界の全てのエンティティとコンポーネントを管理する中心的な構造体 (自作ECSのコア！)。
///
/// カードのデータ (`Card`) と、カードがどの山にいるか (`StackInfo`) はここに入る。
/// 山そのもの (`Pile`) は `Board` が持っているよ。
pub struct World {
    /// 現在生存しているエンティティIDのセット。
    entities: HashSet<Entity>,
    /// 次に生成するエンティティに割り当てるID。
    next_entity_id: usize,
    /// TypeId ごとのコンポーネント倉庫。
    component_stores: HashMap<TypeId, ComponentStorage>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        World {
            entities: HashSet::new(),
            next_entity_id: 0,
            component_stores: HashMap::new(),
        }
    }

    /// 新しいエンティティを生成して返す。ID は 0 からの連番！
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(entity);
        debug!("World: Created entity with ID {}", entity.0);
        entity
    }

    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// 生存しているエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// 新しい型のコンポーネントを World に登録する。
    /// その型専用のストレージ (`HashMap<Entity, T>`) を用意するよ！
    ///
    /// 二回登録すると前の倉庫は捨てられる (警告ログが出る)。
    pub fn register_component<T: Component>(&mut self) {
        debug!("World: Registering component type {}", std::any::type_name::<T>());
        let storage: ComponentStorage = Box::new(HashMap::<Entity, T>::new());
        if self.component_stores.insert(TypeId::of::<T>(), storage).is_some() {
            warn!(
                "World: Component type {} was registered more than once! Overwriting previous registration.",
                std::any::type_name::<T>()
            );
        }
    }

    /// その型のコンポーネントが登録済みか？
    pub fn is_component_registered<T: Component>(&self) -> bool {
        self.component_stores.contains_key(&TypeId::of::<T>())
    }

    /// エンティティにコンポーネントを追加する (既にあれば上書き)。
    /// 死んでるエンティティには何もしない。
    ///
    /// # パニック
    /// `register_component::<T>()` を呼び忘れていたらパニック！これはプログラムのバグだからね。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.is_entity_alive(entity) {
            return;
        }
        let storage = self
            .component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_mut::<HashMap<Entity, T>>());
        match storage {
            Some(storage) => {
                storage.insert(entity, component);
            }
            None => panic!(
                "World: Component type {} not registered! Call register_component::<{}>() first.",
                std::any::type_name::<T>(),
                std::any::type_name::<T>()
            ),
        }
    }

    /// 読み取り専用の参照を取得。どこかで見つからなければ `None`。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_ref::<HashMap<Entity, T>>())
            .and_then(|storage| storage.get(&entity))
    }

    /// 書き込み可能な参照を取得。死んだエンティティには `None`。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_entity_alive(entity) {
            return None;
        }
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_mut::<HashMap<Entity, T>>())
            .and_then(|storage| storage.get_mut(&entity))
    }

    /// コンポーネントを削除して、その値を返す。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.component_stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_mut::<HashMap<Entity, T>>())
            .and_then(|storage| storage.remove(&entity))
    }

    /// 指定された型のコンポーネントを持つ、生存中のエンティティ一覧。
    /// HashMap の順番はバラバラなので、ID 順にソートして返すよ (結果を決定的にするため)。
    pub fn get_all_entities_with_component<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .component_stores
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.downcast_ref::<HashMap<Entity, T>>())
            .map(|storage| {
                storage
                    .keys()
                    .copied()
                    .filter(|e| self.is_entity_alive(*e))
                    .collect()
            })
            .unwrap_or_default();
        entities.sort();
        entities
    }

    /// テスト用: 型ごとの生ストレージを覗く。
    #[cfg(test)]
    pub(crate) fn storage<T: Component>(&self) -> Option<&dyn Any> {
        self.component_stores
            .get(&TypeId::of::<T>())
            .map(|storage| &**storage)
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod tests;
