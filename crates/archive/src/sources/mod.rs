pub mod loteriascaixa;
