pub const CONTAINER: &str = "min-h-screen bg-gray-50 p-4";
pub const CARD: &str = "max-w-md mx-auto bg-white rounded-xl shadow-lg overflow-hidden";
pub const TEXT_H1: &str = "text-2xl font-bold text-gray-800";
pub const TEXT_COPYRIGHT: &str = "text-sm text-center text-gray-500 mb-6";
pub const BUTTON_ICON: &str = "text-gray-600 hover:text-gray-800 transition-colors duration-200";
pub const SPIN_BUTTON: &str = "w-full py-3 px-6 bg-rose-500 text-white rounded-lg font-semibold hover:bg-rose-600 disabled:bg-rose-300 transition-colors mb-6 shadow-md hover:shadow-lg transform hover:-translate-y-0.5";
pub const RESULT_CARD: &str = "bg-rose-50 rounded-lg p-4 border-2 border-rose-200";
