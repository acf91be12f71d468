// コアトレイト定義 - 設定ストアとテキスト変換の抽象化

use mockall::automock;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

/// キーと値の設定ストアを抽象化するトレイト
///
/// データ処理器はこのトレイト越しに設定を読み書きする。
/// 所有・共有の方法（単独所有、`Rc<RefCell<_>>`、`Arc<Mutex<_>>`）は
/// 組み込み側のアプリケーションが選ぶ。
#[automock]
pub trait ConfigStore {
    /// 値を取得（キーが無ければデフォルト値）
    fn get_value(&self, key: &str, default: &str) -> String;

    /// 値を設定（後勝ち）
    fn set_value(&mut self, key: &str, value: &str);

    /// キーの存在確認
    fn has_key(&self, key: &str) -> bool;
}

/// 文字列変換を抽象化するトレイト
///
/// 実装は純粋で、空文字列を含む全ての入力に対して定義されていること
#[automock]
pub trait TextTransform {
    fn transform(&self, input: &str) -> String;
}

// 単一スレッドでの共有
impl<S: ConfigStore + ?Sized> ConfigStore for Rc<RefCell<S>> {
    fn get_value(&self, key: &str, default: &str) -> String {
        self.borrow().get_value(key, default)
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.borrow_mut().set_value(key, value)
    }

    fn has_key(&self, key: &str) -> bool {
        self.borrow().has_key(key)
    }
}

// 呼び出し側がロックを選んだ場合の共有
impl<S: ConfigStore + ?Sized> ConfigStore for Arc<Mutex<S>> {
    fn get_value(&self, key: &str, default: &str) -> String {
        let guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.get_value(key, default)
    }

    fn set_value(&mut self, key: &str, value: &str) {
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.set_value(key, value)
    }

    fn has_key(&self, key: &str) -> bool {
        let guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.has_key(key)
    }
}

// ConfigStore for Box<dyn ConfigStore>
impl ConfigStore for Box<dyn ConfigStore> {
    fn get_value(&self, key: &str, default: &str) -> String {
        self.as_ref().get_value(key, default)
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.as_mut().set_value(key, value)
    }

    fn has_key(&self, key: &str) -> bool {
        self.as_ref().has_key(key)
    }
}
